//! Platform abstractions.

pub(crate) mod fs {
    use std::path::Path;

    /// Extension trait for file access checks.
    pub(crate) trait PathExt {
        /// Returns whether the path may be executed by the current user.
        fn executable(&self) -> bool;
    }

    #[cfg(unix)]
    impl PathExt for Path {
        fn executable(&self) -> bool {
            nix::unistd::access(self, nix::unistd::AccessFlags::X_OK).is_ok()
        }
    }

    #[cfg(not(unix))]
    impl PathExt for Path {
        fn executable(&self) -> bool {
            self.exists()
        }
    }
}

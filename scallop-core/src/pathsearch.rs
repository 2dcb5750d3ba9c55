//! Path searching utilities.

use std::{collections::VecDeque, path::PathBuf};

use crate::sys::fs::PathExt;

/// Encapsulates the result of a path search.
pub struct ExecutablePathSearch<PI, N>
where
    PI: AsRef<str>,
    N: AsRef<str>,
{
    paths: VecDeque<PI>,
    filename: N,
}

impl<PI, N> Iterator for ExecutablePathSearch<PI, N>
where
    PI: AsRef<str>,
    N: AsRef<str>,
{
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.paths.pop_front() {
            let path = PathBuf::from(path.as_ref()).join(self.filename.as_ref());
            if path.is_file() && path.as_path().executable() {
                return Some(path);
            }
        }

        None
    }
}

/// Search for the given executable name in the provided paths.
///
/// # Arguments
///
/// * `paths` - An iterator over the paths to search.
/// * `filename` - The name of the executable file to search for.
pub fn search_for_executable<P, PI, N>(paths: P, filename: N) -> ExecutablePathSearch<PI, N>
where
    P: Iterator<Item = PI>,
    PI: AsRef<str>,
    N: AsRef<str>,
{
    ExecutablePathSearch {
        paths: paths.collect(),
        filename,
    }
}

/// Resolves a command name to an executable path.
///
/// A name containing a path separator is used directly, with only an
/// existence/executability check. Otherwise the entries of `path_value`
/// (colon-separated, in listed order) are searched and the first hit wins.
/// When PATH is empty or unset, the literal name is still attempted, which
/// covers commands in the current directory.
///
/// # Arguments
///
/// * `path_value` - The current value of the PATH entry, if any.
/// * `name` - The command name to resolve.
pub fn resolve_command(path_value: Option<&str>, name: &str) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) {
        return executable_at(PathBuf::from(name));
    }

    match path_value {
        Some(path_value) if !path_value.is_empty() => {
            search_for_executable(path_value.split(':'), name).next()
        }
        _ => executable_at(PathBuf::from(name)),
    }
}

fn executable_at(path: PathBuf) -> Option<PathBuf> {
    (path.is_file() && path.as_path().executable()).then_some(path)
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    fn make_executable(dir: &std::path::Path, name: &str) -> anyhow::Result<PathBuf> {
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n")?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    #[test]
    fn test_first_match_wins_by_path_order() -> anyhow::Result<()> {
        let first = tempfile::tempdir()?;
        let second = tempfile::tempdir()?;
        let expected = make_executable(first.path(), "probe")?;
        make_executable(second.path(), "probe")?;

        let path_value = format!("{}:{}", first.path().display(), second.path().display());
        let resolved = resolve_command(Some(path_value.as_str()), "probe");
        assert_eq!(resolved, Some(expected));

        Ok(())
    }

    #[test]
    fn test_non_executable_entries_are_skipped() -> anyhow::Result<()> {
        let first = tempfile::tempdir()?;
        let second = tempfile::tempdir()?;

        let shadowed = first.path().join("probe");
        std::fs::write(&shadowed, "data")?;
        std::fs::set_permissions(&shadowed, std::fs::Permissions::from_mode(0o644))?;
        let expected = make_executable(second.path(), "probe")?;

        let path_value = format!("{}:{}", first.path().display(), second.path().display());
        let resolved = resolve_command(Some(path_value.as_str()), "probe");
        assert_eq!(resolved, Some(expected));

        Ok(())
    }

    #[test]
    fn test_name_with_separator_bypasses_search() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let script = make_executable(dir.path(), "probe")?;

        let name = script.display().to_string();
        assert_eq!(resolve_command(None, &name), Some(script));
        assert_eq!(
            resolve_command(Some("/nonexistent"), "/also/nonexistent/probe"),
            None
        );

        Ok(())
    }

    #[test]
    fn test_miss_yields_none() {
        assert_eq!(resolve_command(Some("/nonexistent-dir"), "probe"), None);
        assert_eq!(resolve_command(None, "no-such-command-here"), None);
    }
}

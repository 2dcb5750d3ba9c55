//! Implements the shell's variable environment.

use indexmap::IndexMap;

/// Ordered store of NAME/VALUE environment entries.
///
/// Names are unique: setting an existing name updates the entry in place and
/// preserves its original position. The flat `NAME=VALUE` view handed to
/// spawned processes is derived on demand, so it always reflects the latest
/// mutation.
#[derive(Clone, Debug, Default)]
pub struct ShellEnvironment {
    vars: IndexMap<String, String>,
}

impl ShellEnvironment {
    /// Returns a new, empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an environment populated from the calling process's
    /// environment, preserving its order.
    pub fn from_process_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Retrieves the value of the entry with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Sets the entry with the given name, updating in place if it already
    /// exists and appending otherwise.
    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_owned(), value.to_owned());
    }

    /// Removes the entry with the given name. Removing an absent name is a
    /// no-op. Returns whether an entry was removed.
    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.shift_remove(name).is_some()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the derived flat `NAME=VALUE` view of the environment.
    pub fn flat_view(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns whether the environment holds no entries.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

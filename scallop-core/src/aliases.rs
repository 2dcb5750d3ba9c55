//! Implements the shell's alias store.

use indexmap::IndexMap;

/// Ordered store of alias definitions.
///
/// Same uniqueness rule as the environment: one entry per name, updates in
/// place. The display form (`name='value'`) is produced by the `alias`
/// builtin; this store only holds the raw pairs.
#[derive(Clone, Debug, Default)]
pub struct AliasSet {
    aliases: IndexMap<String, String>,
}

impl AliasSet {
    /// Returns a new, empty alias store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves the replacement text bound to the given name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Binds the given name to the given replacement text, updating in place
    /// if the name is already bound.
    pub fn set(&mut self, name: &str, value: &str) {
        self.aliases.insert(name.to_owned(), value.to_owned());
    }

    /// Removes the binding for the given name, if present.
    pub fn unset(&mut self, name: &str) -> bool {
        self.aliases.shift_remove(name).is_some()
    }

    /// Returns an iterator over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns whether no aliases are defined.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let mut aliases = AliasSet::new();
        aliases.set("ll", "ls -l");
        aliases.set("la", "ls -a");
        aliases.set("ll", "ls -la");

        assert_eq!(aliases.get("ll"), Some("ls -la"));
        let names: Vec<_> = aliases.iter().map(|(name, _)| name.to_owned()).collect();
        assert_eq!(names, vec!["ll", "la"]);
    }

    #[test]
    fn test_unset_absent_is_noop() {
        let mut aliases = AliasSet::new();
        assert!(!aliases.unset("missing"));
        aliases.set("ll", "ls -l");
        assert!(aliases.unset("ll"));
        assert!(aliases.is_empty());
    }
}

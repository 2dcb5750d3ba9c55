//! Alias and `$`-variable expansion over command segments.

use itertools::Itertools;

use crate::Shell;
use crate::trace_categories;

/// Expands a command segment: one alias pass over the first word, then a
/// single left-to-right variable pass. Pure transform; the result is ready
/// for whitespace tokenization.
///
/// # Arguments
///
/// * `shell` - The shell whose stores back the expansion.
/// * `segment` - The raw segment text.
pub fn expand(shell: &Shell, segment: &str) -> String {
    let aliased = expand_alias(shell, segment);
    expand_variables(shell, &aliased)
}

/// Performs at most one alias substitution on the segment's first word.
///
/// The substitution is suppressed when the alias value's own first word is
/// the alias name itself (e.g. `alias ls='ls -la'`); together with the
/// single-pass contract this keeps self-referential aliases from looping.
fn expand_alias(shell: &Shell, segment: &str) -> String {
    let trimmed = segment.trim_start();
    let Some(first_word) = trimmed.split_whitespace().next() else {
        return segment.to_owned();
    };

    let Some(value) = shell.aliases.get(first_word) else {
        return segment.to_owned();
    };

    if value.split_whitespace().next() == Some(first_word) {
        return segment.to_owned();
    }

    tracing::debug!(target: trace_categories::EXPANSION, "alias: {first_word} -> {value}");

    let rest = &trimmed[first_word.len()..];
    format!("{value}{rest}")
}

/// Substitutes `$`-prefixed words in a single left-to-right scan: `$$` is the
/// process id, `$?` the last exit status, and `$NAME` the environment value
/// of NAME (empty when absent). A bare `$` stays literal. No nested or
/// repeated substitution.
fn expand_variables(shell: &Shell, segment: &str) -> String {
    segment
        .split_whitespace()
        .map(|word| match word.strip_prefix('$') {
            None | Some("") => word.to_owned(),
            Some("$") => std::process::id().to_string(),
            Some("?") => shell.last_exit_status.to_string(),
            Some(name) => shell.env.get(name).unwrap_or_default().to_owned(),
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CreateOptions;
    use pretty_assertions::assert_eq;

    fn test_shell() -> Shell {
        Shell::new(&CreateOptions {
            inherit_env: false,
            ..CreateOptions::default()
        })
    }

    #[test]
    fn test_alias_replaces_first_word_only() {
        let mut shell = test_shell();
        shell.aliases.set("greet", "echo hello");

        assert_eq!(expand(&shell, "greet world"), "echo hello world");
        assert_eq!(expand(&shell, "say greet"), "say greet");
    }

    #[test]
    fn test_alias_expansion_is_single_pass() {
        let mut shell = test_shell();
        shell.aliases.set("a", "b");
        shell.aliases.set("b", "c");

        assert_eq!(expand(&shell, "a"), "b");
    }

    #[test]
    fn test_self_referential_alias_is_suppressed() {
        let mut shell = test_shell();
        shell.aliases.set("ls", "ls -la");

        assert_eq!(expand(&shell, "ls /tmp"), "ls /tmp");
    }

    #[test]
    fn test_variable_expansion() {
        let mut shell = test_shell();
        shell.env.set("X", "1");
        shell.last_exit_status = 7;

        assert_eq!(expand(&shell, "echo $X"), "echo 1");
        assert_eq!(expand(&shell, "echo $?"), "echo 7");
        assert_eq!(expand(&shell, "echo $$"), format!("echo {}", std::process::id()));
    }

    #[test]
    fn test_unset_variable_expands_to_empty() {
        let shell = test_shell();
        assert_eq!(expand(&shell, "echo $MISSING"), "echo ");
    }

    #[test]
    fn test_bare_dollar_stays_literal() {
        let shell = test_shell();
        assert_eq!(expand(&shell, "echo $"), "echo $");
    }

    #[test]
    fn test_no_nested_substitution() {
        let mut shell = test_shell();
        shell.env.set("A", "$B");
        shell.env.set("B", "deep");

        assert_eq!(expand(&shell, "echo $A"), "echo $B");
    }

    #[test]
    fn test_dollar_in_word_middle_is_untouched() {
        let mut shell = test_shell();
        shell.env.set("X", "1");

        assert_eq!(expand(&shell, "echo a$X"), "echo a$X");
    }
}

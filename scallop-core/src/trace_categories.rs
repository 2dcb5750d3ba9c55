//! Trace utilities

/// Trace category for command execution.
pub const COMMANDS: &str = "commands";
/// Trace category for alias and variable expansion.
pub const EXPANSION: &str = "expansion";
/// Trace category for user input.
pub const INPUT: &str = "input";
/// Trace category for line splitting and tokenization.
pub const PARSE: &str = "parse";

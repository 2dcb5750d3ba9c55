//! Splits raw input lines into chained command segments and argument vectors.
//!
//! There is deliberately no quoting or escaping here: `&&`, `||`, `;` and a
//! whole-word `#` are always treated as syntax, matching the shell's observed
//! behavior.

/// Tag describing the operator that preceded a segment on its line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChainOperator {
    /// No operator; the segment opens the line.
    None,
    /// `&&`: run only if the previous segment succeeded.
    And,
    /// `||`: run only if the previous segment failed.
    Or,
    /// `;`: run unconditionally.
    Seq,
}

/// A single chain-split portion of an input line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandSegment {
    /// The raw segment text, prior to expansion and tokenization.
    pub text: String,
    /// The operator that preceded this segment.
    pub op: ChainOperator,
}

/// Truncates the line at a whole-word comment marker: a `#` at the start of
/// the line or preceded by whitespace.
pub fn strip_comment(line: &str) -> &str {
    let mut prev: Option<char> = None;
    for (i, c) in line.char_indices() {
        if c == '#' && prev.is_none_or(char::is_whitespace) {
            return &line[..i];
        }
        prev = Some(c);
    }
    line
}

/// Splits a line on the chain operators `&&`, `||` and `;`, in order. The
/// two-character operators are matched greedily before the one-character
/// operator, so `a && b` never parses as two `;`-less fragments around `&`.
/// Empty segments (from consecutive or trailing operators) are preserved
/// here; the caller skips them as no-ops.
pub fn split_chain(line: &str) -> Vec<CommandSegment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut op = ChainOperator::None;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        let next_op = match c {
            '&' if chars.peek() == Some(&'&') => Some(ChainOperator::And),
            '|' if chars.peek() == Some(&'|') => Some(ChainOperator::Or),
            ';' => Some(ChainOperator::Seq),
            _ => None,
        };

        if let Some(next_op) = next_op {
            if next_op != ChainOperator::Seq {
                chars.next();
            }
            segments.push(CommandSegment {
                text: std::mem::take(&mut current),
                op,
            });
            op = next_op;
        } else {
            current.push(c);
        }
    }

    segments.push(CommandSegment { text: current, op });
    segments
}

/// Tokenizes a segment into an argument vector by splitting on whitespace.
/// Runs of delimiters collapse, so the result never contains empty strings.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(segments: &[CommandSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn ops(segments: &[CommandSegment]) -> Vec<ChainOperator> {
        segments.iter().map(|s| s.op).collect()
    }

    #[test]
    fn test_single_segment() {
        let segments = split_chain("echo hello");
        assert_eq!(texts(&segments), vec!["echo hello"]);
        assert_eq!(ops(&segments), vec![ChainOperator::None]);
    }

    #[test]
    fn test_operators() {
        let segments = split_chain("a && b || c ; d");
        assert_eq!(texts(&segments), vec!["a ", " b ", " c ", " d"]);
        assert_eq!(
            ops(&segments),
            vec![
                ChainOperator::None,
                ChainOperator::And,
                ChainOperator::Or,
                ChainOperator::Seq
            ]
        );
    }

    #[test]
    fn test_single_ampersand_and_pipe_are_literal() {
        let segments = split_chain("a & b | c");
        assert_eq!(texts(&segments), vec!["a & b | c"]);
    }

    #[test]
    fn test_empty_segments_are_preserved() {
        let segments = split_chain("a ;; b &&");
        assert_eq!(texts(&segments), vec!["a ", "", " b ", ""]);
        assert_eq!(
            ops(&segments),
            vec![
                ChainOperator::None,
                ChainOperator::Seq,
                ChainOperator::Seq,
                ChainOperator::And
            ]
        );
    }

    #[test]
    fn test_empty_line() {
        let segments = split_chain("");
        assert_eq!(texts(&segments), vec![""]);
    }

    #[test]
    fn test_strip_comment_at_line_start() {
        assert_eq!(strip_comment("# echo hi"), "");
    }

    #[test]
    fn test_strip_comment_after_whitespace() {
        assert_eq!(strip_comment("echo hi # trailing"), "echo hi ");
    }

    #[test]
    fn test_hash_inside_word_is_not_a_comment() {
        assert_eq!(strip_comment("echo a#b"), "echo a#b");
    }

    #[test]
    fn test_tokenize_collapses_delimiter_runs() {
        assert_eq!(tokenize("  a \t b\nc  "), vec!["a", "b", "c"]);
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_rejoin_reproduces_normalized_input() {
        for line in ["ls -l /tmp", "  spaced   out\targs ", "one"] {
            let rejoined = tokenize(line).join(" ");
            let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
            assert_eq!(rejoined, normalized);
        }
    }
}

//! Construction of a [`Command`] from a token sequence.
//!
//! The builder walks the tokens left to right, separating redirection
//! operators (`<`, `>`, `>>`) from positional arguments. Operator recognition
//! is exact string equality on a standalone token; an operator embedded in a
//! larger token is treated as ordinary text.

/// A single parsed command line.
///
/// Built fresh per input line and discarded once dispatched; nothing here
/// persists across lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// Positional arguments in input order. The program name, when present,
    /// is `args[0]`. Redirection operators and their operands never appear
    /// here.
    pub args: Vec<String>,
    /// File to read as the child's standard input, if any.
    pub input_path: Option<String>,
    /// File to write as the child's standard output, if any.
    pub output_path: Option<String>,
    /// When true, `output_path` is opened in append mode instead of
    /// create/truncate.
    pub append_output: bool,
}

impl Command {
    /// The program to run: `args[0]`, or `None` for an empty (no-op) command.
    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Consume a token sequence into a [`Command`].
///
/// Rules, per token:
/// - `<` takes the following token as `input_path`;
/// - `>` takes the following token as `output_path` in truncate mode;
/// - `>>` takes the following token as `output_path` in append mode;
/// - anything else is appended to `args`.
///
/// An operator at the end of the line, with no operand after it, is dropped
/// with no effect. A repeated operator overwrites the earlier value: the last
/// occurrence wins, including its truncate/append mode. This mirrors the
/// historic behavior of the shell rather than raising a parse error, and is
/// never fallible.
pub fn build_command(tokens: Vec<String>) -> Command {
    let mut cmd = Command::default();
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        match token.as_str() {
            "<" => {
                if let Some(target) = tokens.next() {
                    cmd.input_path = Some(target);
                }
            }
            ">" => {
                if let Some(target) = tokens.next() {
                    cmd.output_path = Some(target);
                    cmd.append_output = false;
                }
            }
            ">>" => {
                if let Some(target) = tokens.next() {
                    cmd.output_path = Some(target);
                    cmd.append_output = true;
                }
            }
            _ => cmd.args.push(token),
        }
    }

    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::split_into_tokens;

    fn parse(line: &str) -> Command {
        build_command(split_into_tokens(line))
    }

    fn strs(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_command() {
        let cmd = parse("ls -l");
        assert_eq!(cmd.args, strs(&["ls", "-l"]));
        assert_eq!(cmd.program(), Some("ls"));
        assert_eq!(cmd.input_path, None);
        assert_eq!(cmd.output_path, None);
        assert!(!cmd.append_output);
    }

    #[test]
    fn test_empty_line_is_noop_command() {
        let cmd = parse("   \t ");
        assert!(cmd.args.is_empty());
        assert_eq!(cmd.program(), None);
    }

    #[test]
    fn test_both_redirections() {
        let cmd = parse("sort < in.txt > out.txt");
        assert_eq!(cmd.args, strs(&["sort"]));
        assert_eq!(cmd.input_path.as_deref(), Some("in.txt"));
        assert_eq!(cmd.output_path.as_deref(), Some("out.txt"));
        assert!(!cmd.append_output);
    }

    #[test]
    fn test_append_redirection() {
        let cmd = parse("echo hi >> log.txt");
        assert_eq!(cmd.args, strs(&["echo", "hi"]));
        assert_eq!(cmd.output_path.as_deref(), Some("log.txt"));
        assert!(cmd.append_output);
    }

    #[test]
    fn test_dangling_operator_is_dropped() {
        let cmd = parse("echo hi >");
        assert_eq!(cmd.args, strs(&["echo", "hi"]));
        assert_eq!(cmd.output_path, None);

        let cmd = parse("echo hi >>");
        assert_eq!(cmd.output_path, None);
        assert!(!cmd.append_output);

        let cmd = parse("cat <");
        assert_eq!(cmd.input_path, None);
    }

    #[test]
    fn test_last_operator_wins() {
        let cmd = parse("cat < a < b");
        assert_eq!(cmd.input_path.as_deref(), Some("b"));

        let cmd = parse("echo hi >> a > b");
        assert_eq!(cmd.output_path.as_deref(), Some("b"));
        assert!(!cmd.append_output, "later > resets append mode");

        let cmd = parse("echo hi > a >> b");
        assert_eq!(cmd.output_path.as_deref(), Some("b"));
        assert!(cmd.append_output);
    }

    #[test]
    fn test_embedded_operator_is_an_argument() {
        let cmd = parse("echo a>b");
        assert_eq!(cmd.args, strs(&["echo", "a>b"]));
        assert_eq!(cmd.output_path, None);
    }

    #[test]
    fn test_operands_never_reach_args() {
        let cmd = parse("sort -r < in.txt > out.txt -u");
        assert_eq!(cmd.args, strs(&["sort", "-r", "-u"]));
    }
}

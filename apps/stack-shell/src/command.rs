//! # Command Parsing
//!
//! One line of input becomes at most one [`Command`].
//!
//! ```text
//! "push hello world"  ──► Push("hello world")
//! "POP"               ──► Pop
//! ""  / "# note"      ──► None (skipped)
//! "pop now"           ──► InvalidArguments
//! "frobnicate"        ──► UnknownCommand
//! ```

use crate::error::{ShellError, ShellResult};

/// A shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push the rest of the line as one value.
    Push(String),
    Pop,
    Peek,
    Size,
    IsEmpty,
    Clear,
    /// List the contents, top first.
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> ShellResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let keyword = keyword.to_lowercase();

        let command = match keyword.as_str() {
            "push" => {
                if rest.is_empty() {
                    return Err(ShellError::invalid_arguments("push", "expected a value"));
                }
                return Ok(Some(Command::Push(rest.to_string())));
            }
            "pop" => Command::Pop,
            "peek" | "top" => Command::Peek,
            "size" | "len" => Command::Size,
            "empty" | "is-empty" => Command::IsEmpty,
            "clear" => Command::Clear,
            "show" | "list" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ShellError::UnknownCommand(keyword.clone())),
        };

        if !rest.is_empty() {
            return Err(ShellError::invalid_arguments(keyword, "takes no arguments"));
        }

        Ok(Some(command))
    }

    /// The canonical keyword for this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Push(_) => "push",
            Command::Pop => "pop",
            Command::Peek => "peek",
            Command::Size => "size",
            Command::IsEmpty => "empty",
            Command::Clear => "clear",
            Command::Show => "show",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

pub const HELP: &str = "\
commands:
  push <value>   push the rest of the line as one value
  pop            remove and print the top value
  peek           print the top value
  size           print the number of values
  empty          print whether the stack is empty
  clear          remove every value
  show           list values, top first, each quoted
  help           print this message
  quit           leave the shell";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn parse(line: &str) -> Option<Command> {
        Command::parse_line(line).unwrap()
    }

    #[test]
    fn test_parse_push_keeps_rest_of_line() {
        assert_eq!(
            parse("push hello   world "),
            Some(Command::Push("hello   world".to_string()))
        );
        assert_eq!(parse("PUSH 42"), Some(Command::Push("42".to_string())));
    }

    #[test]
    fn test_parse_nullary_commands() {
        assert_eq!(parse("pop"), Some(Command::Pop));
        assert_eq!(parse("  Peek "), Some(Command::Peek));
        assert_eq!(parse("len"), Some(Command::Size));
        assert_eq!(parse("is-empty"), Some(Command::IsEmpty));
        assert_eq!(parse("clear"), Some(Command::Clear));
        assert_eq!(parse("list"), Some(Command::Show));
        assert_eq!(parse("exit"), Some(Command::Quit));
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("# push 1"), None);
    }

    #[test]
    fn test_push_without_value_is_rejected() {
        let err = Command::parse_line("push   ").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArguments);
        assert_eq!(err.to_string(), "push: expected a value");
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        let err = Command::parse_line("pop 2").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse_line("Frobnicate x").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownCommand);
        assert_eq!(err.to_string(), "Unknown command: 'frobnicate' (try 'help')");
    }
}

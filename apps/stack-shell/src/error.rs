//! # Shell Error Types
//!
//! Errors surfaced to the shell user, each mapped to a machine-readable code.
//!
//! ```text
//! StackError::Empty        ──► ShellError::Stack            ──► EMPTY_STACK
//! "frobnicate"             ──► ShellError::UnknownCommand   ──► UNKNOWN_COMMAND
//! "push" with no value     ──► ShellError::InvalidArguments ──► INVALID_ARGUMENTS
//! line not valid UTF-8     ──► ShellError::InvalidInput     ──► INVALID_INPUT
//! read/write failure       ──► ShellError::Io               ──► INTERNAL
//! ```

use std::fmt;

use lifo_core::StackError;
use serde::Serialize;
use thiserror::Error;

/// Machine-readable error code written alongside every error reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// pop/peek on an empty stack
    EmptyStack,

    /// Keyword not recognized
    UnknownCommand,

    /// Keyword recognized, arguments wrong
    InvalidArguments,

    /// Line could not be decoded
    InvalidInput,

    /// I/O failure
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyStack => "EMPTY_STACK",
            ErrorCode::UnknownCommand => "UNKNOWN_COMMAND",
            ErrorCode::InvalidArguments => "INVALID_ARGUMENTS",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while parsing or executing a shell command.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The stack rejected the operation.
    #[error(transparent)]
    Stack(#[from] StackError),

    /// The first word of the line is not a known command.
    #[error("Unknown command: '{0}' (try 'help')")]
    UnknownCommand(String),

    /// The command was recognized but its arguments are wrong.
    #[error("{command}: {reason}")]
    InvalidArguments { command: String, reason: String },

    /// The input line is not valid UTF-8.
    #[error("line {line} is not valid UTF-8")]
    InvalidInput { line: usize },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Creates an invalid arguments error.
    pub fn invalid_arguments(command: impl Into<String>, reason: impl Into<String>) -> Self {
        ShellError::InvalidArguments {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Returns the code reported to the user.
    pub fn code(&self) -> ErrorCode {
        match self {
            ShellError::Stack(_) => ErrorCode::EmptyStack,
            ShellError::UnknownCommand(_) => ErrorCode::UnknownCommand,
            ShellError::InvalidArguments { .. } => ErrorCode::InvalidArguments,
            ShellError::InvalidInput { .. } => ErrorCode::InvalidInput,
            ShellError::Io(_) => ErrorCode::Internal,
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;
    use lifo_core::Operation;

    #[test]
    fn test_stack_error_maps_to_empty_stack() {
        let err: ShellError = StackError::Empty {
            operation: Operation::Pop,
        }
        .into();
        assert_eq!(err.code(), ErrorCode::EmptyStack);
        assert_eq!(err.to_string(), "cannot pop an empty stack");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidArguments).unwrap();
        assert_eq!(json, "\"INVALID_ARGUMENTS\"");
        assert_eq!(ErrorCode::InvalidArguments.to_string(), "INVALID_ARGUMENTS");
    }

    #[test]
    fn test_as_str_matches_serialized_code() {
        let all = [
            ErrorCode::EmptyStack,
            ErrorCode::UnknownCommand,
            ErrorCode::InvalidArguments,
            ErrorCode::InvalidInput,
            ErrorCode::Internal,
        ];
        for code in all {
            let value = serde_json::to_value(code).unwrap();
            assert_eq!(value, serde_json::Value::String(code.as_str().to_string()));
        }
    }

    #[test]
    fn test_invalid_input_message() {
        let err = ShellError::InvalidInput { line: 2 };
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(err.to_string(), "line 2 is not valid UTF-8");
    }

    #[test]
    fn test_io_error_is_internal() {
        let err: ShellError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}

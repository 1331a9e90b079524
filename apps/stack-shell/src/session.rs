//! # Session
//!
//! Owns the `Stack<String>` for one shell run and applies commands to it.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command              Stack call             Output                     │
//! │  ───────              ──────────             ──────                     │
//! │  Push(v) ───────────► push(v) ─────────────► Pushed { size }            │
//! │  Pop ───────────────► pop()? ──────────────► Value { value }            │
//! │  Peek ──────────────► peek()? ─────────────► Value { value }            │
//! │  Size ──────────────► size() ──────────────► Size { size }              │
//! │  IsEmpty ───────────► is_empty() ──────────► Empty { empty }            │
//! │  Clear ─────────────► clear() ─────────────► Cleared                    │
//! │  Show ──────────────► iter() ──────────────► Contents { items }         │
//! │                                                                         │
//! │  pop()/peek() on empty → StackError::Empty → ShellError::Stack          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lifo_core::Stack;
use serde::Serialize;
use tracing::debug;

use crate::command::Command;
use crate::config::MAX_INITIAL_CAPACITY;
use crate::error::ShellResult;

/// Successful result of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    Pushed { size: usize },
    Value { value: String },
    Size { size: usize },
    Empty { empty: bool },
    Cleared,
    /// Top first.
    Contents { items: Vec<String> },
    Help,
    Bye,
}

/// A single shell session.
#[derive(Debug, Default)]
pub struct Session {
    stack: Stack<String>,
}

impl Session {
    /// Creates a session whose stack pre-allocates `capacity` slots,
    /// clamped to `MAX_INITIAL_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        Session {
            stack: Stack::with_capacity(capacity.min(MAX_INITIAL_CAPACITY)),
        }
    }

    /// Read-only view of the session stack.
    pub fn stack(&self) -> &Stack<String> {
        &self.stack
    }

    /// Applies `command` to the stack.
    ///
    /// Empty-stack errors are returned as-is; the stack is left unchanged.
    pub fn execute(&mut self, command: Command) -> ShellResult<Output> {
        debug!(command = command.name(), size = self.stack.size(), "Executing command");

        let output = match command {
            Command::Push(value) => {
                self.stack.push(value);
                Output::Pushed {
                    size: self.stack.size(),
                }
            }
            Command::Pop => Output::Value {
                value: self.stack.pop()?,
            },
            Command::Peek => Output::Value {
                value: self.stack.peek()?.clone(),
            },
            Command::Size => Output::Size {
                size: self.stack.size(),
            },
            Command::IsEmpty => Output::Empty {
                empty: self.stack.is_empty(),
            },
            Command::Clear => {
                self.stack.clear();
                Output::Cleared
            }
            Command::Show => Output::Contents {
                items: self.stack.iter().cloned().collect(),
            },
            Command::Help => Output::Help,
            Command::Quit => Output::Bye,
        };

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, ShellError};

    fn push(session: &mut Session, value: &str) -> Output {
        session
            .execute(Command::Push(value.to_string()))
            .unwrap()
    }

    #[test]
    fn test_push_reports_new_size() {
        let mut session = Session::new(4);
        assert_eq!(push(&mut session, "a"), Output::Pushed { size: 1 });
        assert_eq!(push(&mut session, "b"), Output::Pushed { size: 2 });
    }

    #[test]
    fn test_pop_and_peek() {
        let mut session = Session::new(4);
        push(&mut session, "1");
        push(&mut session, "2");

        assert_eq!(
            session.execute(Command::Peek).unwrap(),
            Output::Value {
                value: "2".to_string()
            }
        );
        assert_eq!(
            session.execute(Command::Pop).unwrap(),
            Output::Value {
                value: "2".to_string()
            }
        );
        assert_eq!(session.execute(Command::Size).unwrap(), Output::Size { size: 1 });
    }

    #[test]
    fn test_pop_on_empty_is_error() {
        let mut session = Session::new(0);
        let err = session.execute(Command::Pop).unwrap_err();
        assert!(matches!(err, ShellError::Stack(_)));
        assert_eq!(err.code(), ErrorCode::EmptyStack);
        assert!(session.stack().is_empty());
    }

    #[test]
    fn test_clear_and_empty() {
        let mut session = Session::new(4);
        push(&mut session, "x");
        assert_eq!(
            session.execute(Command::IsEmpty).unwrap(),
            Output::Empty { empty: false }
        );
        assert_eq!(session.execute(Command::Clear).unwrap(), Output::Cleared);
        assert_eq!(session.execute(Command::Clear).unwrap(), Output::Cleared);
        assert_eq!(
            session.execute(Command::IsEmpty).unwrap(),
            Output::Empty { empty: true }
        );
        assert!(session.execute(Command::Peek).is_err());
    }

    #[test]
    fn test_show_lists_top_first() {
        let mut session = Session::new(4);
        push(&mut session, "a");
        push(&mut session, "b");
        assert_eq!(
            session.execute(Command::Show).unwrap(),
            Output::Contents {
                items: vec!["b".to_string(), "a".to_string()]
            }
        );
        assert_eq!(session.stack().size(), 2);
    }

    #[test]
    fn test_huge_capacity_is_clamped() {
        let mut session = Session::new(usize::MAX);
        assert!(session.stack().is_empty());
        assert_eq!(push(&mut session, "a"), Output::Pushed { size: 1 });
    }

    #[test]
    fn test_output_json_shape() {
        let json = serde_json::to_string(&Output::Pushed { size: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"pushed","size":3}"#);

        let json = serde_json::to_string(&Output::Cleared).unwrap();
        assert_eq!(json, r#"{"kind":"cleared"}"#);
    }
}

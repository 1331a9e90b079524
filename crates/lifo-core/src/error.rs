//! # Error Types
//!
//! Domain-specific error types for lifo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lifo-core errors (this file)                                          │
//! │  └── StackError       - Operation needs an element, stack has none     │
//! │                                                                         │
//! │  stack-shell errors (app)                                              │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── ShellError       - What the shell user sees (rendered)            │
//! │                                                                         │
//! │  Flow: StackError → ShellError → Reply → stdout                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (which operation failed)
//! 3. Never signal failure with a sentinel value

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Operation
// =============================================================================

/// An operation that requires at least one element on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Remove and return the top element.
    Pop,
    /// Read the top element.
    Peek,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Pop => write!(f, "pop"),
            Operation::Peek => write!(f, "peek"),
        }
    }
}

// =============================================================================
// Stack Error
// =============================================================================

/// Errors raised by [`Stack`](crate::Stack) operations.
///
/// There is exactly one kind: the container is empty. It is returned
/// synchronously to the caller and never recovered inside the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was invoked on a stack holding zero elements.
    ///
    /// ## When This Occurs
    /// ```text
    /// Stack: []
    ///      │
    ///      ▼
    /// pop() / peek()
    ///      │
    ///      ▼
    /// Empty { operation: Pop }  → "cannot pop an empty stack"
    /// ```
    #[error("cannot {operation} an empty stack")]
    Empty { operation: Operation },
}

impl StackError {
    /// Returns true if this is the empty-container error.
    pub fn is_empty(&self) -> bool {
        matches!(self, StackError::Empty { .. })
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            StackError::Empty { operation } => *operation,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StackError.
pub type CoreResult<T> = Result<T, StackError>;

// =============================================================================
// Unit Tests
// =============================================================================

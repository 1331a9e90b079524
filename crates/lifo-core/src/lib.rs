//! # lifo-core: A Guarded Last-In-First-Out Container
//!
//! This crate holds the container logic for lifo as pure code with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          lifo Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stack-shell (apps/)                          │   │
//! │  │    stdin ──► Command ──► Session ──► Reply ──► stdout           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lifo-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │        ┌───────────┐              ┌───────────┐                 │   │
//! │  │        │   stack   │              │   error   │                 │   │
//! │  │        │  Stack<T> │              │StackError │                 │   │
//! │  │        └───────────┘              └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO SENTINELS                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stack`] - The `Stack<T>` container
//! - [`error`] - The empty-container error
//!
//! ## Example Usage
//!
//! ```rust
//! use lifo_core::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push("a");
//! stack.push("b");
//! stack.push("c");
//!
//! assert_eq!(stack.peek(), Ok(&"c"));
//! assert_eq!(stack.size(), 3);
//!
//! stack.clear();
//! assert!(stack.is_empty());
//! assert!(stack.peek().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod stack;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreResult, Operation, StackError};
pub use stack::Stack;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default pre-allocation used by callers that do not pick their own.
pub const DEFAULT_CAPACITY: usize = 16;

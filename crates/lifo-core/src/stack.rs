//! # Stack Module
//!
//! Provides [`Stack<T>`], a last-in-first-out container bounded only by memory.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Backing Vec<T>                                                         │
//! │                                                                         │
//! │    index:   0      1      2                                             │
//! │           ┌────┐ ┌────┐ ┌────┐                                          │
//! │           │ a  │ │ b  │ │ c  │ ◄── top (last pushed, first popped)      │
//! │           └────┘ └────┘ └────┘                                          │
//! │           bottom                                                        │
//! │                                                                         │
//! │  push → Vec::push      pop  → Vec::pop      peek → Vec::last            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lifo_core::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.pop().is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{CoreResult, Operation, StackError};

// =============================================================================
// Stack Type
// =============================================================================

/// A last-in-first-out container of `T`.
///
/// ## Invariants
/// - `size()` always equals the number of held elements
/// - `peek`/`pop` see the most recently pushed element not yet popped
/// - `peek`/`pop` on an empty stack return [`StackError::Empty`], never a sentinel
///
/// Serializes as a plain array in bottom-to-top order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    ///
    /// Capacity is a hint; pushing beyond it grows the stack.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `item` as the new top. Never fails.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        trace!(size = self.items.len(), "push");
    }

    /// Removes and returns the top element.
    ///
    /// ## Errors
    /// [`StackError::Empty`] if the stack holds no elements.
    ///
    /// ## Example
    /// ```rust
    /// use lifo_core::{Operation, Stack, StackError};
    ///
    /// let mut stack: Stack<&str> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(stack.pop(), Ok("c"));
    /// assert_eq!(stack.size(), 2);
    ///
    /// let mut empty: Stack<u8> = Stack::new();
    /// assert_eq!(empty.pop(), Err(StackError::Empty { operation: Operation::Pop }));
    /// ```
    pub fn pop(&mut self) -> CoreResult<T> {
        let item = self.items.pop().ok_or(StackError::Empty {
            operation: Operation::Pop,
        })?;
        trace!(size = self.items.len(), "pop");
        Ok(item)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// ## Errors
    /// [`StackError::Empty`] if the stack holds no elements.
    pub fn peek(&self) -> CoreResult<&T> {
        self.items.last().ok_or(StackError::Empty {
            operation: Operation::Peek,
        })
    }

    /// Returns a mutable reference to the top element.
    ///
    /// Fails exactly like [`peek`](Self::peek).
    pub fn peek_mut(&mut self) -> CoreResult<&mut T> {
        self.items.last_mut().ok_or(StackError::Empty {
            operation: Operation::Peek,
        })
    }

    /// Returns true iff the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes every element. Calling it on an empty stack is a no-op.
    pub fn clear(&mut self) {
        let dropped = self.items.len();
        self.items.clear();
        trace!(dropped, "clear");
    }

    /// Iterates from top to bottom without removing anything.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Pops every element, yielding them top to bottom.
    ///
    /// The stack is empty once the iterator is dropped, even if it was not
    /// fully consumed.
    pub fn drain(&mut self) -> std::iter::Rev<std::vec::Drain<'_, T>> {
        trace!(size = self.items.len(), "drain");
        self.items.drain(..).rev()
    }

    /// Consumes the stack, returning its elements bottom to top.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// The last element of the vector becomes the top.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

/// Pushes elements in iteration order; the last one yielded is the top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
        trace!(size = self.items.len(), "extend");
    }
}

/// Yields owned elements top to bottom.
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

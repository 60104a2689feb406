//! # Iterator
//!
//! [`Cursor`] walks a slice front to back with the classic `has_next` / `next` pair.
//! Running past the end is an error ([`IteratorError::Exhausted`]), never stale data.
//!
//! ```rust
//! use pattern_catalog::iterator::{Cursor, Item, IteratorError};
//!
//! let items = [Item::Int(1), Item::from("LeShawn"), Item::Bool(false), Item::Float(1.24)];
//! let mut cursor = Cursor::new(&items);
//! while cursor.has_next() {
//!     println!("{}", cursor.try_next().unwrap());
//! }
//! assert_eq!(cursor.try_next(), Err(IteratorError::Exhausted { len: 4 }));
//! ```
//!
//! A cursor cannot be rewound. Build a new one over the same slice to start again.

pub mod error;
pub mod item;

pub use error::*;
pub use item::*;

use tracing::warn;

/// Forward-only cursor over a borrowed slice.
///
/// `position` is always within `0..=items.len()`.
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// True while there is at least one element left.
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Returns the element under the cursor and moves past it.
    ///
    /// # Errors
    /// [`IteratorError::Exhausted`] once every element has been returned. The cursor
    /// stays at the end.
    pub fn try_next(&mut self) -> Result<&'a T, IteratorError> {
        let Some(item) = self.items.get(self.position) else {
            warn!(len = self.items.len(), "Cursor exhausted");
            return Err(IteratorError::Exhausted {
                len: self.items.len(),
            });
        };
        self.position += 1;
        Ok(item)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.try_next().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

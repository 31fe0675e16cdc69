//! Cursor-based traversal over order labels.
//!
//! # Invariants
//! - The iterator borrows its order; the order cannot change mid-traversal.
//! - One instance is single-use: once exhausted it keeps yielding `None`.
//!   Call `Order::iter` again for another pass.

use crate::model::order::Order;
use std::iter::FusedIterator;

/// Forward-only iterator yielding order labels in insertion order.
#[derive(Debug, Clone)]
pub struct OrderIter<'a> {
    order: &'a Order,
    cursor: usize,
}

impl<'a> OrderIter<'a> {
    pub fn new(order: &'a Order) -> Self {
        Self { order, cursor: 0 }
    }

    /// Number of labels already yielded.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for OrderIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.order.lines().get(self.cursor)?;
        self.cursor += 1;
        Some(line.label.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.item_count().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrderIter<'_> {}

impl FusedIterator for OrderIter<'_> {}

//! Ordering domain model.
//!
//! # Responsibility
//! - Define catalog items, orders and the order traversal.
//!
//! # Invariants
//! - Orders copy name and price out of menu items; they keep no reference
//!   back to the catalog.

pub mod menu_item;
pub mod order;
pub mod order_iter;

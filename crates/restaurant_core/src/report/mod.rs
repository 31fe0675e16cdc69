//! Presentation helpers for orders.

pub mod receipt;

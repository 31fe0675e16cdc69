//! Menu catalog construction and lookup.

pub mod menu;

//! Core use-case services.
//!
//! # Responsibility
//! - Combine catalog lookup, order mutation and promotions into the
//!   entry points used by front ends.

pub mod order_service;

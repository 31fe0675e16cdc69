//! Promotion engine.
//!
//! # Responsibility
//! - Compute an order's discount fraction from its size, the student flag
//!   and one random draw.
//! - Keep the random draw behind [`random::RandomSource`] so tests can force
//!   either branch.

pub mod random;
pub mod rules;

//! Core domain logic for restaurant ordering.
//! This crate is the single source of truth for pricing and discount rules.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod promotion;
pub mod report;
pub mod service;

pub use catalog::menu::{Menu, MenuError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::menu_item::{ItemKind, MenuItem, MenuItemValidationError, Price, Temperature};
pub use model::order::{Order, OrderId, OrderLine};
pub use model::order_iter::OrderIter;
pub use promotion::random::{FixedFraction, RandomSource, SeededRandom, ThreadRandom};
pub use promotion::rules::{
    Promotion, PromotionEngine, PromotionOutcome, PromotionRules, PromotionRulesError,
};
pub use report::receipt::{format_amount, format_percent, IterationSummary, Receipt, ReceiptLine};
pub use service::order_service::{OrderService, OrderServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

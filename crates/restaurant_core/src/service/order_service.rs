//! Order use-case service.
//!
//! # Responsibility
//! - Resolve menu items by name when adding them to an order.
//! - Apply promotions at checkout and hand back a printable receipt.
//!
//! # Invariants
//! - Orders only receive items that exist on the service's menu.
//! - Checkout recomputes the discount from scratch every time.

use crate::catalog::menu::Menu;
use crate::model::order::Order;
use crate::promotion::random::RandomSource;
use crate::promotion::rules::PromotionEngine;
use crate::report::receipt::Receipt;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, OrderServiceError>;

/// Use-case wrapper over a menu and a promotion engine.
pub struct OrderService<R: RandomSource> {
    menu: Menu,
    promotions: PromotionEngine<R>,
}

impl<R: RandomSource> OrderService<R> {
    pub fn new(menu: Menu, promotions: PromotionEngine<R>) -> Self {
        Self { menu, promotions }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Starts an empty order.
    pub fn open_order(&self, is_student: bool) -> Order {
        let order = Order::new(is_student);
        info!(
            "event=order_open module=service order_id={} student={}",
            order.id(),
            is_student
        );
        order
    }

    /// Adds `quantity` units of the menu item called `name`.
    ///
    /// # Errors
    /// - `UnknownItem` when `name` is not on the menu; the order is untouched.
    pub fn add_by_name(&self, order: &mut Order, name: &str, quantity: u32) -> ServiceResult<usize> {
        let Some(item) = self.menu.find(name) else {
            warn!(
                "event=order_add_item module=service status=error order_id={} error_code=unknown_item item={:?}",
                order.id(),
                name
            );
            return Err(OrderServiceError::UnknownItem(name.to_string()));
        };
        Ok(order.add_item(item, quantity))
    }

    /// Applies promotions and snapshots the order.
    pub fn checkout(&mut self, order: &mut Order) -> Receipt {
        let outcome = self.promotions.apply(order);
        let receipt = Receipt::from_order(order);
        info!(
            "event=order_checkout module=service status=ok order_id={} items={} subtotal={} discount={} applied={:?} total={:.2}",
            receipt.order_id,
            receipt.lines.len(),
            receipt.subtotal,
            receipt.discount,
            outcome.applied,
            receipt.total
        );
        receipt
    }
}

/// Service-level failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderServiceError {
    UnknownItem(String),
}

impl Display for OrderServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem(name) => write!(f, "menu has no item named `{name}`"),
        }
    }
}

impl Error for OrderServiceError {}

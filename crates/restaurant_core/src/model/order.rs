//! Order aggregate.
//!
//! # Responsibility
//! - Accumulate purchased lines in insertion order.
//! - Hold the discount fraction computed by the promotion engine.
//!
//! # Invariants
//! - Lines are only appended, never removed or reordered.
//! - Labels are unique within one order (`"{name} {ordinal}"`).
//! - `discount` is written only by `crate::promotion` and stays in `[0, 1]`.

use crate::model::menu_item::{MenuItem, Price};
use crate::model::order_iter::OrderIter;
use crate::promotion::random::RandomSource;
use crate::promotion::rules::{PromotionOutcome, PromotionRules};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one order.
pub type OrderId = Uuid;

/// One purchased unit, copied out of a menu item at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Generated `"{item_name} {ordinal}"` key.
    pub label: String,
    pub item_name: String,
    /// 1-based position among lines sharing `item_name`.
    pub ordinal: u32,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<OrderLine>,
    discount: f64,
    is_student: bool,
}

impl Order {
    /// Creates an empty order with no discount.
    pub fn new(is_student: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            lines: Vec::new(),
            discount: 0.0,
            is_student,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn is_student(&self) -> bool {
        self.is_student
    }

    /// Appends `quantity` lines for `item`, returning how many were added.
    ///
    /// Numbering continues after the highest ordinal already used for the
    /// same item name, so repeated adds never produce duplicate labels.
    /// A zero quantity is a no-op. Ordinals stop at `u32::MAX`; units past
    /// that are not added and the returned count reflects the shortfall.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) -> usize {
        let last_ordinal = self
            .lines
            .iter()
            .filter(|line| line.item_name == item.name())
            .map(|line| line.ordinal)
            .max()
            .unwrap_or(0);

        let added = last_ordinal.saturating_add(quantity) - last_ordinal;
        if added < quantity {
            warn!(
                "event=order_add_item module=order status=truncated order_id={} item={:?} requested={} added={}",
                self.id,
                item.name(),
                quantity,
                added
            );
        }

        self.lines.reserve(added as usize);
        for ordinal in (1..=added).map(|step| last_ordinal + step) {
            self.lines.push(OrderLine {
                label: format!("{} {}", item.name(), ordinal),
                item_name: item.name().to_string(),
                ordinal,
                price: item.price(),
            });
        }

        debug!(
            "event=order_add_item module=order order_id={} item={:?} quantity={} lines={}",
            self.id,
            item.name(),
            added,
            self.lines.len()
        );
        added as usize
    }

    /// Sum of all line prices before discount.
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Subtotal reduced by the current discount fraction.
    pub fn calculate_total(&self) -> f64 {
        let subtotal = self.subtotal() as f64;
        subtotal - subtotal * self.discount
    }

    pub fn discount_fraction(&self) -> f64 {
        self.discount
    }

    /// Number of lines (one per purchased unit).
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Price recorded under `label`, if present.
    pub fn price_of(&self, label: &str) -> Option<Price> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.price)
    }

    /// Fresh label traversal in insertion order.
    pub fn iter(&self) -> OrderIter<'_> {
        OrderIter::new(self)
    }

    /// `(label, price)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Price)> + '_ {
        self.lines
            .iter()
            .map(|line| (line.label.as_str(), line.price))
    }

    /// Recomputes the discount with the house rules and `random`.
    pub fn promos(&mut self, random: &mut dyn RandomSource) -> PromotionOutcome {
        PromotionRules::default().apply(self, random)
    }

    pub(crate) fn set_discount(&mut self, discount: f64) {
        debug_assert!((0.0..=1.0).contains(&discount));
        self.discount = discount;
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a str;
    type IntoIter = OrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

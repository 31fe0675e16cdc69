//! Printable order snapshots.
//!
//! # Responsibility
//! - Capture an order's lines, discount and totals at one point in time.
//! - Render amounts with `,` thousands grouping for terminal output.

use crate::model::menu_item::Price;
use crate::model::order::{Order, OrderId};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One printed line: label and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub label: String,
    pub price: Price,
}

/// Snapshot of an order for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub order_id: OrderId,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Price,
    pub discount: f64,
    pub total: f64,
}

impl Receipt {
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.id(),
            lines: order
                .entries()
                .map(|(label, price)| ReceiptLine {
                    label: label.to_string(),
                    price,
                })
                .collect(),
            subtotal: order.subtotal(),
            discount: order.discount_fraction(),
            total: order.calculate_total(),
        }
    }
}

impl Display for Receipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{} - {}", line.label, format_amount(line.price as f64))?;
        }
        writeln!(f, "Descuento: {}%", format_percent(self.discount))?;
        write!(f, "Total: ${} pesos", format_amount(self.total))
    }
}

/// Totals recomputed by walking the order's label iterator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationSummary {
    pub item_count: usize,
    pub sum: Price,
    pub discount: f64,
    pub total: f64,
}

impl IterationSummary {
    pub fn from_order(order: &Order) -> Self {
        let mut item_count = 0;
        let mut sum = 0;
        for (label, line) in order.iter().zip(order.lines()) {
            debug_assert_eq!(label, line.label);
            item_count += 1;
            sum += line.price;
        }
        Self {
            item_count,
            sum,
            discount: order.discount_fraction(),
            total: order.calculate_total(),
        }
    }
}

impl Display for IterationSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total: {} pesos, descuento aplicado: {}%, total con descuento: {} pesos",
            format_amount(self.sum as f64),
            format_percent(self.discount),
            format_amount(self.total)
        )
    }
}

/// Formats `amount` with `,` grouping and at most two decimals.
///
/// A zero fractional part is dropped: `39200.0` renders as `39,200`.
pub fn format_amount(amount: f64) -> String {
    render_decimal(amount, true)
}

/// Formats a fraction as a percentage number, e.g. `0.3` as `30`.
pub fn format_percent(fraction: f64) -> String {
    render_decimal(fraction * 100.0, false)
}

fn render_decimal(value: f64, grouped: bool) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = if grouped {
        group_thousands(whole)
    } else {
        whole.to_string()
    };
    if fraction != 0 {
        let digits = format!("{fraction:02}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    if value < 0.0 && cents != 0 {
        out.insert(0, '-');
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

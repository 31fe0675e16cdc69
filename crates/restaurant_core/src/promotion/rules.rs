//! Discount rules and the engine that applies them to orders.
//!
//! # Invariants
//! - Every application starts from a zero discount.
//! - The jackpot draw replaces the accumulated discount with exactly `1.0`.
//! - Validated rules keep the additive branch within `[0, 1]`.

use crate::model::order::Order;
use crate::promotion::random::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A rule that contributed to an order's discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Promotion {
    /// Order reached the bulk item threshold.
    Bulk,
    /// Customer is a student.
    Student,
    /// Random full-discount draw.
    Jackpot,
}

/// Result of one promotion pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionOutcome {
    pub discount: f64,
    pub applied: Vec<Promotion>,
}

/// Tunable discount rates. `Default` is the house configuration.
///
/// Deserialization fills missing fields from the defaults and then runs
/// [`PromotionRules::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PromotionRulesRecord")]
pub struct PromotionRules {
    pub bulk_min_items: usize,
    pub bulk_rate: f64,
    pub student_rate: f64,
    pub jackpot_probability: f64,
}

impl Default for PromotionRules {
    fn default() -> Self {
        Self {
            bulk_min_items: 6,
            bulk_rate: 0.10,
            student_rate: 0.20,
            jackpot_probability: 0.10,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct PromotionRulesRecord {
    bulk_min_items: usize,
    bulk_rate: f64,
    student_rate: f64,
    jackpot_probability: f64,
}

impl Default for PromotionRulesRecord {
    fn default() -> Self {
        let rules = PromotionRules::default();
        Self {
            bulk_min_items: rules.bulk_min_items,
            bulk_rate: rules.bulk_rate,
            student_rate: rules.student_rate,
            jackpot_probability: rules.jackpot_probability,
        }
    }
}

impl TryFrom<PromotionRulesRecord> for PromotionRules {
    type Error = PromotionRulesError;

    fn try_from(value: PromotionRulesRecord) -> Result<Self, Self::Error> {
        let rules = Self {
            bulk_min_items: value.bulk_min_items,
            bulk_rate: value.bulk_rate,
            student_rate: value.student_rate,
            jackpot_probability: value.jackpot_probability,
        };
        rules.validate()?;
        Ok(rules)
    }
}

impl PromotionRules {
    /// Checks every rate is a fraction and the additive rates fit in 100%.
    pub fn validate(&self) -> Result<(), PromotionRulesError> {
        for (rule, value) in [
            ("bulk_rate", self.bulk_rate),
            ("student_rate", self.student_rate),
            ("jackpot_probability", self.jackpot_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PromotionRulesError::RateOutOfRange { rule, value });
            }
        }
        let combined = self.bulk_rate + self.student_rate;
        if combined > 1.0 {
            return Err(PromotionRulesError::CombinedRateExceedsFull(combined));
        }
        Ok(())
    }

    /// Recomputes `order`'s discount, drawing exactly once from `random`.
    ///
    /// Unvalidated rules cannot push the discount outside `[0, 1]`: NaN
    /// rates count as zero and the additive sum is clamped.
    pub fn apply(&self, order: &mut Order, random: &mut dyn RandomSource) -> PromotionOutcome {
        let mut discount = 0.0;
        let mut applied = Vec::new();

        if order.item_count() >= self.bulk_min_items {
            discount += as_fraction(self.bulk_rate);
            applied.push(Promotion::Bulk);
        }
        if order.is_student() {
            discount += as_fraction(self.student_rate);
            applied.push(Promotion::Student);
        }

        let draw = random.next_fraction();
        if draw < self.jackpot_probability {
            discount = 1.0;
            applied = vec![Promotion::Jackpot];
        }

        order.set_discount(as_fraction(discount));
        debug!(
            "event=promotions_applied module=promotion order_id={} items={} student={} draw={:.4} discount={} applied={:?}",
            order.id(),
            order.item_count(),
            order.is_student(),
            draw,
            order.discount_fraction(),
            applied
        );

        PromotionOutcome {
            discount: order.discount_fraction(),
            applied,
        }
    }
}

fn as_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Validated rules bundled with an owned random source.
#[derive(Debug, Clone)]
pub struct PromotionEngine<R: RandomSource> {
    rules: PromotionRules,
    random: R,
}

impl<R: RandomSource> PromotionEngine<R> {
    /// Creates an engine after validating `rules`.
    pub fn new(rules: PromotionRules, random: R) -> Result<Self, PromotionRulesError> {
        rules.validate()?;
        Ok(Self { rules, random })
    }

    /// Engine using the house rules.
    pub fn with_default_rules(random: R) -> Self {
        Self {
            rules: PromotionRules::default(),
            random,
        }
    }

    pub fn rules(&self) -> &PromotionRules {
        &self.rules
    }

    pub fn apply(&mut self, order: &mut Order) -> PromotionOutcome {
        self.rules.apply(order, &mut self.random)
    }
}

/// Rejected promotion configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PromotionRulesError {
    RateOutOfRange { rule: &'static str, value: f64 },
    CombinedRateExceedsFull(f64),
}

impl Display for PromotionRulesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateOutOfRange { rule, value } => {
                write!(f, "promotion {rule} must be within [0, 1], got {value}")
            }
            Self::CombinedRateExceedsFull(value) => write!(
                f,
                "bulk_rate + student_rate must not exceed 1.0, got {value}"
            ),
        }
    }
}

impl Error for PromotionRulesError {}

#[cfg(test)]
mod tests {
    use super::{as_fraction, PromotionRules, PromotionRulesError};

    #[test]
    fn as_fraction_zeroes_nan_and_clamps() {
        assert_eq!(as_fraction(f64::NAN), 0.0);
        assert_eq!(as_fraction(1.1), 1.0);
        assert_eq!(as_fraction(-0.2), 0.0);
        assert_eq!(as_fraction(f64::INFINITY), 1.0);
        assert_eq!(as_fraction(0.3), 0.3);
    }

    #[test]
    fn house_rules_are_valid() {
        assert!(PromotionRules::default().validate().is_ok());
    }

    #[test]
    fn rejects_rate_outside_unit_interval() {
        let rules = PromotionRules {
            student_rate: 1.5,
            ..PromotionRules::default()
        };
        assert_eq!(
            rules.validate().unwrap_err(),
            PromotionRulesError::RateOutOfRange {
                rule: "student_rate",
                value: 1.5,
            }
        );
    }

    #[test]
    fn rejects_nan_probability() {
        let rules = PromotionRules {
            jackpot_probability: f64::NAN,
            ..PromotionRules::default()
        };
        assert!(matches!(
            rules.validate().unwrap_err(),
            PromotionRulesError::RateOutOfRange {
                rule: "jackpot_probability",
                ..
            }
        ));
    }

    #[test]
    fn rejects_stacked_rates_above_full_discount() {
        let rules = PromotionRules {
            bulk_rate: 0.6,
            student_rate: 0.5,
            ..PromotionRules::default()
        };
        assert!(matches!(
            rules.validate().unwrap_err(),
            PromotionRulesError::CombinedRateExceedsFull(_)
        ));
    }
}

//! # Pricing
//!
//! Subtotal, discount and total for a set of reserved order lines. Every step is exact
//! [`Decimal`] arithmetic and the only rounding happens once, in [`PricingEngine::compute_total`].
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use storefront::model::{OrderLine, ProductId};
//! use storefront::pricing::PricingEngine;
//!
//! let engine = PricingEngine::default();
//! let lines = vec![OrderLine {
//!     product_id: ProductId(1),
//!     quantity: 2,
//!     unit_price: dec!(999.99),
//! }];
//!
//! assert_eq!(engine.price(&lines, None), dec!(1999.98));
//! assert_eq!(engine.price(&lines, Some("SAVE10")), dec!(1799.98));
//! ```

use crate::config::DiscountRule;
use crate::model::OrderLine;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Fractional digits kept in a final total.
const TOTAL_SCALE: u32 = 2;

/// Percentage discounts keyed by code. Codes match case-sensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingEngine {
    discounts: HashMap<String, Decimal>,
}

impl Default for PricingEngine {
    /// `SAVE10` takes 10% off, `SAVE20` takes 20%.
    fn default() -> Self {
        Self::from_rules(&DiscountRule::defaults())
    }
}

impl PricingEngine {
    /// Builds an engine from configured rules. A later rule for the same code wins.
    pub fn from_rules(rules: &[DiscountRule]) -> Self {
        let discounts = rules
            .iter()
            .map(|rule| (rule.code.clone(), rule.percent))
            .collect();
        Self { discounts }
    }

    /// Percentage for `code`, if recognized.
    pub fn percent_for(&self, code: &str) -> Option<Decimal> {
        self.discounts.get(code).copied()
    }

    /// Σ `unit_price × quantity` over all lines.
    pub fn compute_subtotal(&self, lines: &[OrderLine]) -> Decimal {
        lines.iter().map(OrderLine::line_total).sum()
    }

    /// `subtotal × percent / 100` for a recognized code, zero otherwise. Not rounded.
    pub fn compute_discount(&self, subtotal: Decimal, code: Option<&str>) -> Decimal {
        match code.and_then(|c| self.percent_for(c)) {
            Some(percent) => subtotal * percent / Decimal::ONE_HUNDRED,
            None => Decimal::ZERO,
        }
    }

    /// `subtotal − discount`, rounded half away from zero to cents.
    pub fn compute_total(&self, subtotal: Decimal, discount: Decimal) -> Decimal {
        (subtotal - discount)
            .round_dp_with_strategy(TOTAL_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Runs subtotal, discount and total in order.
    pub fn price(&self, lines: &[OrderLine], code: Option<&str>) -> Decimal {
        let subtotal = self.compute_subtotal(lines);
        let discount = self.compute_discount(subtotal, code);
        self.compute_total(subtotal, discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use rust_decimal_macros::dec;

    fn line(product: u32, quantity: u32, unit_price: Decimal) -> OrderLine {
        OrderLine {
            product_id: ProductId(product),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let engine = PricingEngine::default();
        let lines = vec![line(1, 2, dec!(999.99)), line(2, 3, dec!(29.99))];
        assert_eq!(engine.compute_subtotal(&lines), dec!(2089.95));
        assert_eq!(engine.compute_subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_known_codes_apply_their_percentage() {
        let engine = PricingEngine::default();
        let lines = vec![line(1, 1, dec!(100.00))];
        assert_eq!(engine.price(&lines, Some("SAVE10")), dec!(90.00));
        assert_eq!(engine.price(&lines, Some("SAVE20")), dec!(80.00));
    }

    #[test]
    fn test_unknown_empty_and_wrong_case_codes_are_ignored() {
        let engine = PricingEngine::default();
        let subtotal = dec!(100.00);
        assert_eq!(engine.compute_discount(subtotal, Some("BOGUS")), Decimal::ZERO);
        assert_eq!(engine.compute_discount(subtotal, Some("")), Decimal::ZERO);
        assert_eq!(engine.compute_discount(subtotal, Some("save10")), Decimal::ZERO);
        assert_eq!(engine.compute_discount(subtotal, None), Decimal::ZERO);
    }

    #[test]
    fn test_total_rounds_once_half_up() {
        let engine = PricingEngine::default();
        // 99.99 * 10 / 100 = 9.999 exactly; 99.99 - 9.999 = 89.991 -> 89.99
        let discount = engine.compute_discount(dec!(99.99), Some("SAVE10"));
        assert_eq!(discount, dec!(9.999));
        assert_eq!(engine.compute_total(dec!(99.99), discount), dec!(89.99));
        assert_eq!(engine.compute_total(dec!(0.125), Decimal::ZERO), dec!(0.13));
    }

    #[test]
    fn test_pricing_is_idempotent() {
        let engine = PricingEngine::default();
        let lines = vec![line(1, 2, dec!(999.99)), line(4, 1, dec!(299.99))];
        let first = engine.price(&lines, Some("SAVE20"));
        let second = engine.price(&lines, Some("SAVE20"));
        assert_eq!(first, second);
        assert_eq!(first, dec!(1839.98));
    }

    #[test]
    fn test_custom_rules_replace_the_defaults() {
        let engine = PricingEngine::from_rules(&[DiscountRule::new("HALF", dec!(50))]);
        let lines = vec![line(1, 1, dec!(10.00))];
        assert_eq!(engine.price(&lines, Some("HALF")), dec!(5.00));
        assert_eq!(engine.price(&lines, Some("SAVE10")), dec!(10.00));
    }
}

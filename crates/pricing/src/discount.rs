use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Pluggable pricing rule applied to a line item's unit price.
///
/// A policy is chosen once per line item at add-time and dispatched through
/// [`DiscountPolicy::apply`]. Cart and catalog code never inspect the
/// variant, so new rules are a variant plus a `match` arm here and nothing
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// No discount: the unit price passes through unchanged.
    #[default]
    None,
    /// `unit_price * (1 - percent / 100)`.
    ///
    /// Callers supply `percent` in [0, 100]. No clamping is performed; values
    /// outside that range produce negative or inflated prices.
    PercentageOff(Decimal),
    /// Buy one, get one free: half the unit price.
    BuyOneGetOneFree,
}

impl DiscountPolicy {
    /// Discounted unit price for `unit_price`.
    ///
    /// Pure and deterministic, total over all non-negative prices.
    pub fn apply(&self, unit_price: Decimal) -> Decimal {
        match *self {
            DiscountPolicy::None => unit_price,
            DiscountPolicy::PercentageOff(percent) => {
                unit_price * (Decimal::ONE - percent / Decimal::ONE_HUNDRED)
            }
            DiscountPolicy::BuyOneGetOneFree => unit_price * dec!(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_discount_is_identity() {
        assert_eq!(DiscountPolicy::None.apply(dec!(800)), dec!(800));
        assert_eq!(DiscountPolicy::None.apply(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn percentage_off_reduces_by_the_given_percent() {
        let policy = DiscountPolicy::PercentageOff(dec!(5));
        assert_eq!(policy.apply(dec!(800)), dec!(760));
    }

    #[test]
    fn zero_percent_keeps_the_list_price() {
        let policy = DiscountPolicy::PercentageOff(Decimal::ZERO);
        assert_eq!(policy.apply(dec!(49.99)), dec!(49.99));
    }

    #[test]
    fn hundred_percent_makes_the_item_free() {
        let policy = DiscountPolicy::PercentageOff(dec!(100));
        assert_eq!(policy.apply(dec!(800)), Decimal::ZERO);
    }

    #[test]
    fn out_of_range_percent_is_not_clamped() {
        // Documented permissiveness: callers own the [0, 100] contract.
        let policy = DiscountPolicy::PercentageOff(dec!(150));
        assert_eq!(policy.apply(dec!(100)), dec!(-50));
    }

    #[test]
    fn buy_one_get_one_free_halves_the_price() {
        assert_eq!(DiscountPolicy::BuyOneGetOneFree.apply(dec!(50)), dec!(25));
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                // Thorough but bounded for CI runtime.
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: percentage-off equals the published formula for any
            /// non-negative price and percent in [0, 100].
            #[test]
            fn percentage_off_matches_formula(
                cents in 0i64..10_000_000,
                percent in 0u32..=100
            ) {
                let price = Decimal::new(cents, 2);
                let percent = Decimal::from(percent);
                let expected = price * (Decimal::ONE - percent / Decimal::ONE_HUNDRED);
                prop_assert_eq!(DiscountPolicy::PercentageOff(percent).apply(price), expected);
            }

            /// Property: an in-range discount never raises the price and
            /// never drops it below zero.
            #[test]
            fn in_range_discount_stays_within_bounds(
                cents in 0i64..10_000_000,
                percent in 0u32..=100
            ) {
                let price = Decimal::new(cents, 2);
                let discounted =
                    DiscountPolicy::PercentageOff(Decimal::from(percent)).apply(price);
                prop_assert!(discounted <= price);
                prop_assert!(discounted >= Decimal::ZERO);
            }

            /// Property: buy-one-get-one-free is exactly half the price.
            #[test]
            fn bogof_is_exactly_half(cents in 0i64..10_000_000) {
                let price = Decimal::new(cents, 2);
                prop_assert_eq!(
                    DiscountPolicy::BuyOneGetOneFree.apply(price),
                    price * dec!(0.5)
                );
            }

            /// Property: the identity policy returns its input unchanged.
            #[test]
            fn identity_returns_input(cents in 0i64..10_000_000) {
                let price = Decimal::new(cents, 2);
                prop_assert_eq!(DiscountPolicy::None.apply(price), price);
            }
        }
    }
}

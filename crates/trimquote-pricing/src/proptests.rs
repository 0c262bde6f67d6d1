//! Property tests for the pricing formulas

use crate::pricing::{gallons_needed, BaseboardRates, PricingEngine, RateTable};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trimquote_common::{round_currency, AddOn, BaseboardRequest, PrepLevel};

fn prep_level() -> impl Strategy<Value = PrepLevel> {
    prop_oneof![
        Just(PrepLevel::Light),
        Just(PrepLevel::Medium),
        Just(PrepLevel::Heavy),
    ]
}

fn add_on() -> impl Strategy<Value = AddOn> {
    prop_oneof![
        Just(AddOn::Caulking),
        Just(AddOn::Sanding),
        Just(AddOn::QuarterRound),
    ]
}

/// Linear feet with cent precision, 0.01 ..= 100000.00
fn linear_feet() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn request(feet: Decimal, prep: PrepLevel, add_ons: &[AddOn]) -> BaseboardRequest {
    add_ons
        .iter()
        .fold(BaseboardRequest::new(feet, prep), |r, a| r.with_add_on(*a))
}

proptest! {
    #[test]
    fn total_is_subtotal_plus_twelve_percent(
        feet in linear_feet(),
        prep in prep_level(),
        add_ons in proptest::collection::vec(add_on(), 0..3),
    ) {
        let engine = PricingEngine::default();
        let result = engine.compute_baseboard(&request(feet, prep, &add_ons)).unwrap();

        let expected = round_currency(result.subtotal * dec!(1.12));
        prop_assert!((result.total.amount - expected).abs() <= dec!(0.01));
    }

    #[test]
    fn total_increases_with_feet(
        feet in linear_feet(),
        extra_feet in 1i64..1000,
        prep in prep_level(),
        add_ons in proptest::collection::vec(add_on(), 0..3),
    ) {
        let engine = PricingEngine::default();
        let smaller = engine.compute_baseboard(&request(feet, prep, &add_ons)).unwrap();
        let larger = engine
            .compute_baseboard(&request(feet + Decimal::from(extra_feet), prep, &add_ons))
            .unwrap();

        prop_assert!(larger.total.amount > smaller.total.amount);
    }

    #[test]
    fn add_on_adds_exactly_feet_times_rate(
        feet in 1i64..100_000,
        prep in prep_level(),
        added in add_on(),
        others in proptest::collection::vec(add_on(), 0..3),
    ) {
        let rates = BaseboardRates::standard();
        let engine = PricingEngine::new(RateTable::new(rates.clone(), Default::default())).unwrap();
        let feet = Decimal::from(feet);

        let others: Vec<AddOn> = others.into_iter().filter(|a| *a != added).collect();
        let without = engine.compute_baseboard(&request(feet, prep, &others)).unwrap();

        let mut with = others.clone();
        with.push(added);
        let with = engine.compute_baseboard(&request(feet, prep, &with)).unwrap();

        prop_assert_eq!(with.subtotal - without.subtotal, feet * rates.add_on_rate(added));
    }

    #[test]
    fn gallons_are_ceiling_of_coverage(
        area in 1i64..50_000,
        coats in 1u32..5,
    ) {
        let area = Decimal::from(area);
        let exact = area * Decimal::from(coats) / dec!(400);
        let gallons = gallons_needed(area, coats, dec!(400)).unwrap();

        if exact.fract().is_zero() {
            prop_assert_eq!(gallons, exact);
        } else {
            prop_assert_eq!(gallons, exact.floor() + Decimal::ONE);
        }
    }
}

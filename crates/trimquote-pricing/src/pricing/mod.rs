//! Pricing module
//!
//! Provides rate-table driven estimate calculation with:
//! - Injected, validated rate tables
//! - Baseboard pricing with add-ons and a materials fee
//! - House pricing with whole-gallon paint quantities

pub mod baseboard;
pub mod engine;
pub mod house;
pub mod rates;

pub use baseboard::BaseboardCalculator;
pub use engine::PricingEngine;
pub use house::{gallons_needed, HouseCalculator};
pub use rates::{BaseboardRates, CaulkPolicy, HouseRates, RateTable};

use rust_decimal::Decimal;
use trimquote_common::PricingError;

/// Turn an overflowed checked operation into a typed error
pub(crate) fn checked(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<Decimal, PricingError> {
    value.ok_or(PricingError::QuantityOverflow { field })
}

//! # Trimquote Common
//!
//! Shared types and errors for the Trimquote estimate tool.
//!
//! ## Core Types
//!
//! - [`PrepLevel`]/[`AddOn`]: categorical inputs that select rates
//! - [`BaseboardRequest`]/[`HouseRequest`]: validated pricing inputs
//! - [`LineItem`]/[`EstimateResult`]: ordered, rounded price breakdown
//! - [`ClientInfo`]/[`Letterhead`]: quote metadata, never priced
//!
//! Amounts are `rust_decimal::Decimal` throughout; see [`types::money`] for
//! the rounding rule.

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{PricingError, QuoteError, RenderError, Result};
pub use types::{
    client::{ClientInfo, Letterhead},
    estimate::{
        BaseboardRequest, EstimateKind, EstimateRequest, EstimateResult, HouseRequest, LineItem,
        Parameter,
    },
    money::{format_amount, format_currency, round_currency},
    prep_level::{AddOn, PrepLevel},
};

/// Trimquote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Trimquote
//!
//! Painting estimate engine and quote renderer.
//!
//! ```text
//! request ──► PricingEngine ──► EstimateResult ──► QuoteFormatter ──► .txt / .csv / .pdf
//! ```
//!
//! - [`common`]: shared request/result types and errors
//! - [`pricing`]: rate tables and the pricing engine
//! - [`render`]: text, CSV, and PDF quote formatters

pub use trimquote_common as common;
pub use trimquote_pricing as pricing;
pub use trimquote_render as render;

pub use trimquote_common::{
    AddOn, BaseboardRequest, ClientInfo, EstimateRequest, EstimateResult, HouseRequest, Letterhead,
    LineItem, PrepLevel, PricingError, QuoteError, Result,
};
pub use trimquote_pricing::{BaseboardRates, CaulkPolicy, HouseRates, PricingEngine, RateTable};
pub use trimquote_render::{Artifact, QuoteFormat, QuoteFormatter};

//! # Trimquote Pricing
//!
//! Pricing engine for painting estimates.
//!
//! ## Baseboard Formula
//!
//! ```text
//! Subtotal = Feet × Rate(prep) + Σ Feet × AddOnRate
//! Total    = Subtotal + Subtotal × Fee
//! ```
//!
//! ## House Formula
//!
//! ```text
//! Gallons = ⌈(Walls + Ceilings) × Coats(prep) / Coverage⌉
//! Total   = Area × SurfaceRate + Doors × DoorRate + Frames × FrameRate + Gallons × GallonPrice
//! ```
//!
//! Intermediate math is exact decimal; line items are rounded half-up to
//! cents only when the result is built.

pub mod pricing;

pub use pricing::{
    BaseboardCalculator, BaseboardRates, CaulkPolicy, HouseCalculator, HouseRates, PricingEngine,
    RateTable,
};

#[cfg(test)]
mod proptests;

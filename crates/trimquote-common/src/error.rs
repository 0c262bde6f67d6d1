//! Error types for Trimquote
//!
//! Provides a unified error type and domain-specific error variants

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Unified error type for Trimquote operations
#[derive(Debug, Error)]
pub enum QuoteError {
    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Filesystem errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Pricing calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Invalid prep level '{0}': choose from light, medium, heavy")]
    InvalidPrepLevel(String),

    #[error("Invalid add-on '{0}': choose from caulk, sanding, quarter-round")]
    InvalidAddOn(String),

    #[error("Invalid quantity for {field}: {value} (must be positive)")]
    InvalidQuantity { field: &'static str, value: Decimal },

    #[error("Quantity too large for {field}: price exceeds the supported range")]
    QuantityOverflow { field: &'static str },

    #[error("Invalid rate table: {0}")]
    InvalidRateTable(String),
}

/// Quote rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CSV encoding failed: {0}")]
    Csv(String),

    #[error("Document layout failed: {0}")]
    Document(String),
}

impl QuoteError {
    /// Short, user-facing label for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::Pricing(PricingError::InvalidPrepLevel(_)) => "invalid_prep_level",
            QuoteError::Pricing(PricingError::InvalidAddOn(_)) => "invalid_add_on",
            QuoteError::Pricing(PricingError::InvalidQuantity { .. }) => "invalid_quantity",
            QuoteError::Pricing(PricingError::QuantityOverflow { .. }) => "quantity_overflow",
            QuoteError::Pricing(PricingError::InvalidRateTable(_)) => "invalid_rate_table",
            QuoteError::Render(_) => "render",
            QuoteError::Config(_) => "config",
            QuoteError::Serialization(_) => "serialization",
            QuoteError::Io(_) => "io",
        }
    }
}

// Implement From for common external error types
impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for QuoteError {
    fn from(err: std::io::Error) -> Self {
        QuoteError::Io(err.to_string())
    }
}

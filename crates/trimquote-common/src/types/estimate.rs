//! Estimate Types - requests in, priced line items out
//!
//! A request is validated and priced by the pricing engine, which produces an
//! [`EstimateResult`]: ordered line items plus a total. Renderers only read
//! results; they never recompute prices.

use super::money::{format_currency, round_currency};
use super::prep_level::{AddOn, PrepLevel};
use crate::error::PricingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Baseboard repaint priced per linear foot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseboardRequest {
    /// Total linear feet of baseboard
    pub linear_feet: Decimal,

    /// Prep level
    pub prep_level: PrepLevel,

    /// Requested add-ons; ordered so iteration matches line-item order
    pub add_ons: BTreeSet<AddOn>,
}

impl BaseboardRequest {
    pub fn new(linear_feet: Decimal, prep_level: PrepLevel) -> Self {
        Self {
            linear_feet,
            prep_level,
            add_ons: BTreeSet::new(),
        }
    }

    /// Build from raw form values, rejecting unknown prep levels and add-ons
    pub fn parse<S: AsRef<str>>(
        linear_feet: Decimal,
        prep_level: &str,
        add_ons: &[S],
    ) -> Result<Self, PricingError> {
        let mut request = Self::new(linear_feet, prep_level.parse()?);
        for add_on in add_ons {
            request.add_ons.insert(add_on.as_ref().parse()?);
        }
        Ok(request)
    }

    /// Request an add-on
    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.insert(add_on);
        self
    }

    pub fn has_add_on(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }
}

/// Interior repaint priced by surface area, doors, and frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRequest {
    /// Wall area in square feet
    pub walls: Decimal,
    /// Ceiling area in square feet
    pub ceilings: Decimal,
    /// Number of doors
    pub doors: u32,
    /// Number of door/window frames
    pub frames: u32,
    /// Prep level, selects the number of coats
    pub prep_level: PrepLevel,
}

impl HouseRequest {
    pub fn new(walls: Decimal, ceilings: Decimal, prep_level: PrepLevel) -> Self {
        Self {
            walls,
            ceilings,
            doors: 0,
            frames: 0,
            prep_level,
        }
    }

    pub fn with_doors(mut self, doors: u32) -> Self {
        self.doors = doors;
        self
    }

    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Walls plus ceilings, or `None` if the sum overflows
    pub fn surface_area(&self) -> Option<Decimal> {
        self.walls.checked_add(self.ceilings)
    }
}

/// Any request the pricing engine accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateRequest {
    Baseboard(BaseboardRequest),
    House(HouseRequest),
}

impl From<BaseboardRequest> for EstimateRequest {
    fn from(request: BaseboardRequest) -> Self {
        EstimateRequest::Baseboard(request)
    }
}

impl From<HouseRequest> for EstimateRequest {
    fn from(request: HouseRequest) -> Self {
        EstimateRequest::House(request)
    }
}

/// Which product an estimate prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateKind {
    Baseboard,
    House,
}

impl EstimateKind {
    pub fn title(&self) -> &'static str {
        match self {
            EstimateKind::Baseboard => "Baseboard Painting Estimate",
            EstimateKind::House => "Interior Painting Estimate",
        }
    }
}

/// One named, rounded monetary component of a breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: Decimal,
}

impl LineItem {
    /// Create a line item, rounding the amount to cents
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount: round_currency(amount),
        }
    }

    /// `Name: $12.34`
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.name, format_currency(self.amount))
    }
}

/// Input parameter echoed on rendered quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub label: String,
    pub value: String,
}

impl Parameter {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// Priced breakdown for a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Product priced
    pub kind: EstimateKind,

    /// Inputs as displayed on the quote
    pub parameters: Vec<Parameter>,

    /// Priced components, in display order
    pub items: Vec<LineItem>,

    /// Pre-fee subtotal, rounded
    pub subtotal: Decimal,

    /// Materials surcharge, when the product carries one
    pub materials_fee: Option<LineItem>,

    /// Final price
    pub total: LineItem,
}

impl EstimateResult {
    /// Name used for the total line
    pub const TOTAL_NAME: &'static str = "Total Price";

    /// Every line item in display order: items, fee, total
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items
            .iter()
            .chain(self.materials_fee.iter())
            .chain(std::iter::once(&self.total))
    }

    /// Look up a line item by name
    pub fn item(&self, name: &str) -> Option<&LineItem> {
        self.line_items().find(|item| item.name == name)
    }

    pub fn total_amount(&self) -> Decimal {
        self.total.amount
    }
}

//! Interior house pricing
//!
//! Total = Surface + Doors + Frames + Paint, where paint is sold by the whole
//! gallon: `gallons = ceil(area × coats / coverage)`. No separate materials
//! fee is charged; material cost is carried by the paint line.

use super::checked;
use super::rates::HouseRates;
use rust_decimal::Decimal;
use trimquote_common::{EstimateKind, EstimateResult, HouseRequest, LineItem, Parameter, PricingError};

/// Whole gallons needed to cover `area` with `coats` coats, `None` on overflow
pub fn gallons_needed(area: Decimal, coats: u32, coverage_sq_ft: Decimal) -> Option<Decimal> {
    area.checked_mul(Decimal::from(coats))?
        .checked_div(coverage_sq_ft)
        .map(|gallons| gallons.ceil())
}

/// House calculator bound to one rate table
pub struct HouseCalculator<'a> {
    rates: &'a HouseRates,
}

impl<'a> HouseCalculator<'a> {
    pub fn new(rates: &'a HouseRates) -> Self {
        Self { rates }
    }

    pub fn calculate(&self, request: &HouseRequest) -> Result<EstimateResult, PricingError> {
        for (field, value) in [("walls", request.walls), ("ceilings", request.ceilings)] {
            if value < Decimal::ZERO {
                return Err(PricingError::InvalidQuantity { field, value });
            }
        }
        let area = checked(request.surface_area(), "surface_area")?;
        if area <= Decimal::ZERO {
            return Err(PricingError::InvalidQuantity {
                field: "surface_area",
                value: area,
            });
        }

        let coats = self.rates.coats_for(request.prep_level);
        let surface_price = checked(area.checked_mul(self.rates.surface_rate), "surface_area")?;
        let door_total = checked(
            Decimal::from(request.doors).checked_mul(self.rates.door_rate),
            "doors",
        )?;
        let frame_total = checked(
            Decimal::from(request.frames).checked_mul(self.rates.frame_rate),
            "frames",
        )?;
        let gallons = checked(
            gallons_needed(area, coats, self.rates.coverage_sq_ft),
            "surface_area",
        )?;
        let paint_cost = checked(gallons.checked_mul(self.rates.gallon_price), "surface_area")?;

        let subtotal = [door_total, frame_total, paint_cost]
            .into_iter()
            .try_fold(surface_price, |sum, price| sum.checked_add(price));
        let subtotal = checked(subtotal, "surface_area")?;

        Ok(EstimateResult {
            kind: EstimateKind::House,
            parameters: vec![
                Parameter::new("Wall Area (sq ft)", request.walls.normalize()),
                Parameter::new("Ceiling Area (sq ft)", request.ceilings.normalize()),
                Parameter::new("Surface Area (sq ft)", area.normalize()),
                Parameter::new("Doors", request.doors),
                Parameter::new("Frames", request.frames),
                Parameter::new("Prep Level", request.prep_level),
                Parameter::new("Coats", coats),
            ],
            items: vec![
                LineItem::new("Surface Painting", surface_price),
                LineItem::new("Doors", door_total),
                LineItem::new("Frames", frame_total),
                LineItem::new(format!("Paint ({} gal)", gallons.normalize()), paint_cost),
            ],
            subtotal: trimquote_common::round_currency(subtotal),
            materials_fee: None,
            total: LineItem::new(EstimateResult::TOTAL_NAME, subtotal),
        })
    }
}

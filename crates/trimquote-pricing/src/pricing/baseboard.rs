//! Baseboard pricing: Total = (Base + Add-ons) × (1 + Fee)
//!
//! - Base: linear feet × prep-level rate
//! - Add-ons: linear feet × per-foot add-on rate, for each enabled add-on
//! - Fee: materials surcharge on the subtotal (12% by default)

use super::checked;
use super::rates::BaseboardRates;
use rust_decimal::Decimal;
use trimquote_common::{
    AddOn, BaseboardRequest, EstimateKind, EstimateResult, LineItem, Parameter, PricingError,
};

/// Baseboard calculator bound to one rate table
pub struct BaseboardCalculator<'a> {
    rates: &'a BaseboardRates,
}

impl<'a> BaseboardCalculator<'a> {
    pub fn new(rates: &'a BaseboardRates) -> Self {
        Self { rates }
    }

    /// Add-ons priced for this request, in line-item order
    pub fn priced_add_ons(&self, request: &BaseboardRequest) -> Vec<AddOn> {
        AddOn::ALL
            .into_iter()
            .filter(|add_on| match add_on {
                AddOn::Caulking => self
                    .rates
                    .caulk_policy
                    .applies(request.prep_level, request.has_add_on(AddOn::Caulking)),
                other => request.has_add_on(*other),
            })
            .collect()
    }

    pub fn calculate(&self, request: &BaseboardRequest) -> Result<EstimateResult, PricingError> {
        let feet = request.linear_feet;
        if feet <= Decimal::ZERO {
            return Err(PricingError::InvalidQuantity {
                field: "linear_feet",
                value: feet,
            });
        }

        let rate = self.rates.rate_for(request.prep_level);
        let base_price = checked(feet.checked_mul(rate), "linear_feet")?;

        let mut items = vec![LineItem::new("Base Price", base_price)];
        let mut subtotal = base_price;
        let add_ons = self.priced_add_ons(request);
        for add_on in &add_ons {
            let rate = self.rates.add_on_rate(*add_on);
            let price = checked(feet.checked_mul(rate), "linear_feet")?;
            subtotal = checked(subtotal.checked_add(price), "linear_feet")?;
            items.push(LineItem::new(add_on.line_item_name(), price));
        }

        let materials_fee = checked(
            subtotal.checked_mul(self.rates.materials_fee_rate),
            "linear_feet",
        )?;
        let total = checked(subtotal.checked_add(materials_fee), "linear_feet")?;

        let add_on_labels = if add_ons.is_empty() {
            "None".to_string()
        } else {
            add_ons
                .iter()
                .map(AddOn::label)
                .collect::<Vec<_>>()
                .join(", ")
        };

        Ok(EstimateResult {
            kind: EstimateKind::Baseboard,
            parameters: vec![
                Parameter::new("Linear Feet", feet.normalize()),
                Parameter::new("Prep Level", request.prep_level),
                Parameter::new("Add-ons", add_on_labels),
            ],
            items,
            subtotal: trimquote_common::round_currency(subtotal),
            materials_fee: Some(LineItem::new(
                self.rates.materials_fee_label(),
                materials_fee,
            )),
            total: LineItem::new(EstimateResult::TOTAL_NAME, total),
        })
    }
}

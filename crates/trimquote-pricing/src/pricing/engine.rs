//! Pricing engine
//!
//! Owns a validated [`RateTable`] and dispatches each request to the
//! calculator for its product. Engines hold no mutable state, so one engine
//! can price any number of requests, from any number of threads.

use super::baseboard::BaseboardCalculator;
use super::house::HouseCalculator;
use super::rates::RateTable;
use rust_decimal::Decimal;
use tracing::{debug, instrument};
use trimquote_common::{
    BaseboardRequest, EstimateRequest, EstimateResult, HouseRequest, PricingError, Result,
};

/// Rate-table driven estimate calculator
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rates: RateTable,
}

impl PricingEngine {
    /// Create an engine, rejecting tables with negative or zero-coverage rates
    pub fn new(rates: RateTable) -> Result<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Price any supported request
    pub fn compute(&self, request: &EstimateRequest) -> Result<EstimateResult> {
        match request {
            EstimateRequest::Baseboard(request) => self.compute_baseboard(request),
            EstimateRequest::House(request) => self.compute_house(request),
        }
    }

    #[instrument(skip(self), fields(prep = %request.prep_level))]
    pub fn compute_baseboard(&self, request: &BaseboardRequest) -> Result<EstimateResult> {
        let result = BaseboardCalculator::new(&self.rates.baseboard).calculate(request)?;
        debug!(
            subtotal = %result.subtotal,
            total = %result.total.amount,
            "Priced baseboard estimate"
        );
        Ok(result)
    }

    #[instrument(skip(self), fields(prep = %request.prep_level))]
    pub fn compute_house(&self, request: &HouseRequest) -> Result<EstimateResult> {
        let result = HouseCalculator::new(&self.rates.house).calculate(request)?;
        debug!(total = %result.total.amount, "Priced house estimate");
        Ok(result)
    }

    /// Price a baseboard job from raw form values
    pub fn compute_baseboard_raw<S: AsRef<str>>(
        &self,
        linear_feet: Decimal,
        prep_level: &str,
        add_ons: &[S],
    ) -> Result<EstimateResult> {
        let request = BaseboardRequest::parse(linear_feet, prep_level, add_ons)
            .map_err(|err: PricingError| {
                debug!(error = %err, "Rejected baseboard input");
                err
            })?;
        self.compute_baseboard(&request)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        // Built-in tables always validate
        Self {
            rates: RateTable::default(),
        }
    }
}

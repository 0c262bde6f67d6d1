//! Rate tables
//!
//! Every constant the engine prices with lives here, so callers (and tests)
//! can inject alternate tables instead of touching global state. Tables
//! deserialize from config files; missing fields fall back to the defaults.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use trimquote_common::{AddOn, PrepLevel, PricingError};

/// How caulking is decided on baseboard jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaulkPolicy {
    /// Caulking is priced only when the customer asks for it
    #[default]
    UserToggled,
    /// Caulking is added on Heavy prep and never otherwise; requests are ignored
    AutoOnHeavy,
}

impl CaulkPolicy {
    /// Whether caulking is priced for this prep level and request flag
    pub fn applies(&self, prep_level: PrepLevel, requested: bool) -> bool {
        match self {
            CaulkPolicy::UserToggled => requested,
            CaulkPolicy::AutoOnHeavy => prep_level == PrepLevel::Heavy,
        }
    }
}

/// Per-linear-foot pricing for baseboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseboardRates {
    pub light: Decimal,
    pub medium: Decimal,
    pub heavy: Decimal,
    pub caulking: Decimal,
    pub sanding: Decimal,
    pub quarter_round: Decimal,
    /// Surcharge on the pre-fee subtotal (0.12 = 12%)
    pub materials_fee_rate: Decimal,
    pub caulk_policy: CaulkPolicy,
}

impl Default for BaseboardRates {
    fn default() -> Self {
        Self::standard()
    }
}

impl BaseboardRates {
    /// Current price list: light 1.25, medium 2.00, heavy 3.00
    pub fn standard() -> Self {
        Self {
            light: dec!(1.25),
            medium: dec!(2.00),
            heavy: dec!(3.00),
            caulking: dec!(0.25),
            sanding: dec!(0.50),
            quarter_round: dec!(0.75),
            materials_fee_rate: dec!(0.12),
            caulk_policy: CaulkPolicy::UserToggled,
        }
    }

    /// Earlier price list: light 1.00, medium 1.50, heavy 2.00
    pub fn economy() -> Self {
        Self {
            light: dec!(1.00),
            medium: dec!(1.50),
            heavy: dec!(2.00),
            ..Self::standard()
        }
    }

    pub fn with_caulk_policy(mut self, policy: CaulkPolicy) -> Self {
        self.caulk_policy = policy;
        self
    }

    /// Labor rate per linear foot
    pub fn rate_for(&self, prep_level: PrepLevel) -> Decimal {
        match prep_level {
            PrepLevel::Light => self.light,
            PrepLevel::Medium => self.medium,
            PrepLevel::Heavy => self.heavy,
        }
    }

    /// Look up a rate from a raw prep-level key
    pub fn rate_for_key(&self, key: &str) -> Result<Decimal, PricingError> {
        Ok(self.rate_for(key.parse()?))
    }

    /// Add-on rate per linear foot
    pub fn add_on_rate(&self, add_on: AddOn) -> Decimal {
        match add_on {
            AddOn::Caulking => self.caulking,
            AddOn::Sanding => self.sanding,
            AddOn::QuarterRound => self.quarter_round,
        }
    }

    /// `Materials Fee (12%)`
    pub fn materials_fee_label(&self) -> String {
        let percent = (self.materials_fee_rate * dec!(100)).normalize();
        format!("Materials Fee ({}%)", percent)
    }

    fn validate(&self) -> Result<(), PricingError> {
        let named = [
            ("baseboard.light", self.light),
            ("baseboard.medium", self.medium),
            ("baseboard.heavy", self.heavy),
            ("baseboard.caulking", self.caulking),
            ("baseboard.sanding", self.sanding),
            ("baseboard.quarter_round", self.quarter_round),
            ("baseboard.materials_fee_rate", self.materials_fee_rate),
        ];
        ensure_non_negative(&named)
    }
}

/// Square-footage pricing for whole interiors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseRates {
    /// Per square foot of wall + ceiling
    pub surface_rate: Decimal,
    pub door_rate: Decimal,
    pub frame_rate: Decimal,
    pub gallon_price: Decimal,
    /// Square feet one gallon covers per coat
    pub coverage_sq_ft: Decimal,
    pub light_coats: u32,
    pub medium_coats: u32,
    pub heavy_coats: u32,
}

impl Default for HouseRates {
    fn default() -> Self {
        Self {
            surface_rate: dec!(1.50),
            door_rate: dec!(50),
            frame_rate: dec!(50),
            gallon_price: dec!(70),
            coverage_sq_ft: dec!(400),
            light_coats: 2,
            medium_coats: 2,
            heavy_coats: 3,
        }
    }
}

impl HouseRates {
    pub fn coats_for(&self, prep_level: PrepLevel) -> u32 {
        match prep_level {
            PrepLevel::Light => self.light_coats,
            PrepLevel::Medium => self.medium_coats,
            PrepLevel::Heavy => self.heavy_coats,
        }
    }

    fn validate(&self) -> Result<(), PricingError> {
        ensure_non_negative(&[
            ("house.surface_rate", self.surface_rate),
            ("house.door_rate", self.door_rate),
            ("house.frame_rate", self.frame_rate),
            ("house.gallon_price", self.gallon_price),
        ])?;
        if self.coverage_sq_ft <= Decimal::ZERO {
            return Err(PricingError::InvalidRateTable(format!(
                "house.coverage_sq_ft must be positive, got {}",
                self.coverage_sq_ft
            )));
        }
        for level in PrepLevel::ALL {
            if self.coats_for(level) == 0 {
                return Err(PricingError::InvalidRateTable(format!(
                    "house.{}_coats must be at least 1",
                    level.as_str()
                )));
            }
        }
        Ok(())
    }
}

/// Complete set of prices for every product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub baseboard: BaseboardRates,
    pub house: HouseRates,
}

impl RateTable {
    pub fn new(baseboard: BaseboardRates, house: HouseRates) -> Self {
        Self { baseboard, house }
    }

    /// Reject tables the engine cannot price with
    pub fn validate(&self) -> Result<(), PricingError> {
        self.baseboard.validate()?;
        self.house.validate()
    }
}

fn ensure_non_negative(rates: &[(&str, Decimal)]) -> Result<(), PricingError> {
    match rates.iter().find(|(_, rate)| *rate < Decimal::ZERO) {
        Some((name, rate)) => Err(PricingError::InvalidRateTable(format!(
            "{} must not be negative, got {}",
            name, rate
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rates() {
        let rates = BaseboardRates::standard();
        assert_eq!(rates.rate_for(PrepLevel::Light), dec!(1.25));
        assert_eq!(rates.rate_for(PrepLevel::Medium), dec!(2.00));
        assert_eq!(rates.rate_for(PrepLevel::Heavy), dec!(3.00));
        assert_eq!(rates.add_on_rate(AddOn::QuarterRound), dec!(0.75));
    }

    #[test]
    fn test_economy_keeps_add_on_rates() {
        let rates = BaseboardRates::economy();
        assert_eq!(rates.rate_for(PrepLevel::Medium), dec!(1.50));
        assert_eq!(rates.add_on_rate(AddOn::Caulking), dec!(0.25));
    }

    #[test]
    fn test_rate_for_unknown_key() {
        let err = BaseboardRates::standard().rate_for_key("extra-heavy").unwrap_err();
        assert!(matches!(err, PricingError::InvalidPrepLevel(_)));
    }

    #[test]
    fn test_caulk_policies_are_exclusive() {
        assert!(CaulkPolicy::UserToggled.applies(PrepLevel::Light, true));
        assert!(!CaulkPolicy::UserToggled.applies(PrepLevel::Heavy, false));
        assert!(CaulkPolicy::AutoOnHeavy.applies(PrepLevel::Heavy, false));
        assert!(!CaulkPolicy::AutoOnHeavy.applies(PrepLevel::Medium, true));
    }

    #[test]
    fn test_materials_fee_label() {
        assert_eq!(BaseboardRates::standard().materials_fee_label(), "Materials Fee (12%)");
        let mut rates = BaseboardRates::standard();
        rates.materials_fee_rate = dec!(0.075);
        assert_eq!(rates.materials_fee_label(), "Materials Fee (7.5%)");
    }

    #[test]
    fn test_coats_per_prep() {
        let rates = HouseRates::default();
        assert_eq!(rates.coats_for(PrepLevel::Light), 2);
        assert_eq!(rates.coats_for(PrepLevel::Medium), 2);
        assert_eq!(rates.coats_for(PrepLevel::Heavy), 3);
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut table = RateTable::default();
        table.baseboard.sanding = dec!(-0.50);
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("baseboard.sanding"));
    }

    #[test]
    fn test_validate_rejects_zero_coverage_and_coats() {
        let mut table = RateTable::default();
        table.house.coverage_sq_ft = Decimal::ZERO;
        assert!(table.validate().is_err());

        let mut table = RateTable::default();
        table.house.heavy_coats = 0;
        assert!(table.validate().unwrap_err().to_string().contains("heavy_coats"));
    }

    #[test]
    fn test_partial_table_deserializes_with_defaults() {
        let table: RateTable = serde_json::from_str(
            r#"{"baseboard": {"heavy": "3.50", "caulk_policy": "auto_on_heavy"}}"#,
        )
        .unwrap();
        assert_eq!(table.baseboard.heavy, dec!(3.50));
        assert_eq!(table.baseboard.light, dec!(1.25));
        assert_eq!(table.baseboard.caulk_policy, CaulkPolicy::AutoOnHeavy);
        assert_eq!(table.house, HouseRates::default());
    }
}

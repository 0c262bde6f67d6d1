//! Surface preparation levels and baseboard add-ons

use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Surface-preparation intensity, determines the base labor rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepLevel {
    /// Clean surface, minimal patching
    Light,
    /// Some scuffs and nail holes
    Medium,
    /// Damaged or heavily coated trim
    Heavy,
}

impl PrepLevel {
    pub const ALL: [PrepLevel; 3] = [PrepLevel::Light, PrepLevel::Medium, PrepLevel::Heavy];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrepLevel::Light => "light",
            PrepLevel::Medium => "medium",
            PrepLevel::Heavy => "heavy",
        }
    }
}

impl FromStr for PrepLevel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(PrepLevel::Light),
            "medium" => Ok(PrepLevel::Medium),
            "heavy" => Ok(PrepLevel::Heavy),
            _ => Err(PricingError::InvalidPrepLevel(s.to_string())),
        }
    }
}

impl fmt::Display for PrepLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PrepLevel::Light => "Light",
            PrepLevel::Medium => "Medium",
            PrepLevel::Heavy => "Heavy",
        };
        f.write_str(label)
    }
}

/// Optional baseboard services priced per linear foot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    Caulking,
    Sanding,
    QuarterRound,
}

impl AddOn {
    /// Add-ons in line-item order
    pub const ALL: [AddOn; 3] = [AddOn::Caulking, AddOn::Sanding, AddOn::QuarterRound];

    /// Name used for the priced line item
    pub fn line_item_name(&self) -> &'static str {
        match self {
            AddOn::Caulking => "Caulking Add-on",
            AddOn::Sanding => "Sanding Add-on",
            AddOn::QuarterRound => "Quarter Round Add-on",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddOn::Caulking => "Caulking",
            AddOn::Sanding => "Sanding",
            AddOn::QuarterRound => "Quarter Round",
        }
    }
}

impl FromStr for AddOn {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caulk" | "caulking" => Ok(AddOn::Caulking),
            "sanding" | "sand" => Ok(AddOn::Sanding),
            "quarter-round" | "quarter_round" | "quarterround" => Ok(AddOn::QuarterRound),
            _ => Err(PricingError::InvalidAddOn(s.to_string())),
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Unit conversion for board coordinates
//!
//! The engine's canonical unit is the mil (one thousandth of an inch).
//! All factors derive from the exact definitions 1 mil = 0.0254 mm = 0.001 inch.

use serde::{Deserialize, Serialize};

/// 1 mil = 0.0254 mm
pub const MIL_TO_MM: f64 = 0.0254;
/// 1 mil = 0.001 inch
pub const MIL_TO_INCH: f64 = 0.001;
/// 1 mm = 39.3700787... mil
pub const MM_TO_MIL: f64 = 1.0 / MIL_TO_MM;
/// 1 inch = 1000 mil
pub const INCH_TO_MIL: f64 = 1000.0;

/// Length unit accepted and reported by the query surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Mil,
    Mm,
    Inch,
}

impl Unit {
    /// Multiplier converting a value in this unit to mil
    pub fn to_mil_factor(self) -> f64 {
        match self {
            Unit::Mil => 1.0,
            Unit::Mm => MM_TO_MIL,
            Unit::Inch => INCH_TO_MIL,
        }
    }

    /// Multiplier converting a mil value to this unit
    pub fn from_mil_factor(self) -> f64 {
        match self {
            Unit::Mil => 1.0,
            Unit::Mm => MIL_TO_MM,
            Unit::Inch => MIL_TO_INCH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Mil => "mil",
            Unit::Mm => "mm",
            Unit::Inch => "inch",
        }
    }
}

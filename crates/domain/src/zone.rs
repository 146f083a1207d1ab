//! Battery zone — categorical health band of the state of charge.

use serde::{Deserialize, Serialize};

/// At or below this state of charge the battery is protected from discharge.
pub const BATTERY_RESERVE_PERCENT: u8 = 20;

/// At or above this state of charge the battery is in its optimal band.
pub const BATTERY_OPTIMAL_PERCENT: u8 = 85;

/// Health band of the battery, derived from state of charge alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryZone {
    /// `soc <= 20`
    Critical,
    /// `20 < soc < 85`
    Safe,
    /// `soc >= 85`
    Optimal,
}

impl BatteryZone {
    /// Classify a state of charge (percent).
    #[must_use]
    pub fn from_soc(soc_percent: u8) -> Self {
        if soc_percent <= BATTERY_RESERVE_PERCENT {
            Self::Critical
        } else if soc_percent >= BATTERY_OPTIMAL_PERCENT {
            Self::Optimal
        } else {
            Self::Safe
        }
    }
}

impl std::fmt::Display for BatteryZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => f.write_str("Critical"),
            Self::Safe => f.write_str("Safe"),
            Self::Optimal => f.write_str("Optimal"),
        }
    }
}

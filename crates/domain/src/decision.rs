//! Decision engine — picks the energy source for the current conditions.
//!
//! Sources are tried in priority order, first match wins:
//!
//! 1. **Solar** when generation covers the load (`solar >= load`).
//! 2. **Battery** when the state of charge is above the reserve (`soc > 20`).
//! 3. **Grid** otherwise, with the battery protected.
//!
//! The battery zone is classified independently from the same state of
//! charge. Time of day is carried for display and never consulted.

use serde::{Deserialize, Serialize};

use crate::conditions::{MAX_SOC_PERCENT, SystemConditions};
use crate::zone::{BATTERY_RESERVE_PERCENT, BatteryZone};

/// Where the load is powered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Solar,
    Battery,
    Grid,
}

impl EnergySource {
    /// Human-readable explanation of why this source was chosen.
    #[must_use]
    pub fn rationale(self) -> &'static str {
        match self {
            Self::Solar => {
                "Solar generation meets demand. AI powers the load using renewable energy and stores excess safely."
            }
            Self::Battery => {
                "Solar is insufficient. AI supplies load using stored battery energy to avoid grid dependency."
            }
            Self::Grid => {
                "Battery is below safe threshold. AI switches to grid power to protect battery health."
            }
        }
    }
}

impl std::fmt::Display for EnergySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar => f.write_str("Solar"),
            Self::Battery => f.write_str("Battery"),
            Self::Grid => f.write_str("Grid"),
        }
    }
}

/// What the battery does while the chosen source powers the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryAction {
    /// Absorbing the solar surplus.
    Charging,
    /// Full, nothing to absorb.
    Idle,
    /// Covering the solar deficit.
    Discharging,
    /// Held at its reserve while the grid takes over.
    Protected,
}

impl std::fmt::Display for BatteryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Charging => f.write_str("Charging"),
            Self::Idle => f.write_str("Idle"),
            Self::Discharging => f.write_str("Discharging"),
            Self::Protected => f.write_str("Protected"),
        }
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyDecision {
    pub source: EnergySource,
    pub battery_action: BatteryAction,
    /// Solar surplus when on solar, deficit covered by the battery when on
    /// battery, `0.0` when on grid. Never negative.
    pub net_flow_kw: f64,
    pub battery_zone: BatteryZone,
    /// Always `source.rationale()`.
    pub rationale: &'static str,
}

/// Decide the energy source, battery action, net flow, and zone.
///
/// Pure and total over validated [`SystemConditions`].
#[must_use]
pub fn decide(conditions: SystemConditions) -> EnergyDecision {
    let solar = conditions.solar_power_kw();
    let load = conditions.load_demand_kw();
    let soc = conditions.battery_soc_percent();

    let (source, battery_action, net_flow_kw) = if solar >= load {
        let action = if soc < MAX_SOC_PERCENT {
            BatteryAction::Charging
        } else {
            BatteryAction::Idle
        };
        (EnergySource::Solar, action, solar - load)
    } else if soc > BATTERY_RESERVE_PERCENT {
        (EnergySource::Battery, BatteryAction::Discharging, load - solar)
    } else {
        (EnergySource::Grid, BatteryAction::Protected, 0.0)
    };

    EnergyDecision {
        source,
        battery_action,
        net_flow_kw,
        battery_zone: BatteryZone::from_soc(soc),
        rationale: source.rationale(),
    }
}

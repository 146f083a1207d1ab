//! Presenter — maps a decision to what the dashboard shows.
//!
//! Pure lookup and formatting. Every zone, source, and battery action maps
//! to exactly one label and colour; no decision logic lives here.

use serde::Serialize;

use voltwise_domain::conditions::SystemConditions;
use voltwise_domain::decision::{BatteryAction, EnergyDecision, EnergySource};
use voltwise_domain::zone::BatteryZone;

/// Page title.
pub const TITLE: &str = "AUTONOMOUS ENERGY CONTROLLER";
/// Subtitle under the page title.
pub const CAPTION: &str = "Agent AI • Renewable-First • Real-Time Decision System";
/// Footer line.
pub const FOOTER: &str = "Autonomous Mode Active • Renewable Energy First • RE15 Prototype";

/// Accent used for the active source and the solar bar.
pub const ACCENT_COLOR: &str = "#22d3ee";
pub const CRITICAL_COLOR: &str = "#f43f5e";
pub const SAFE_COLOR: &str = "#22d3ee";
pub const OPTIMAL_COLOR: &str = "#10b981";
pub const LOAD_BAR_COLOR: &str = "#fbbf24";

pub const SOLAR_SERIES_LABEL: &str = "Solar Generation";
pub const LOAD_SERIES_LABEL: &str = "Load Consumption";

/// One bar of the energy-flow snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    /// Power in kW.
    pub value: f64,
    pub color: &'static str,
}

/// Display-ready projection of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub source_label: &'static str,
    pub source_color: &'static str,
    pub battery_action_label: &'static str,
    pub battery_soc_label: String,
    pub zone_label: &'static str,
    pub zone_color: &'static str,
    pub load_label: String,
    pub time_of_day_label: String,
    pub net_flow_label: String,
    pub rationale: &'static str,
    /// Solar generation first, then load consumption.
    pub chart: [ChartSeries; 2],
}

/// Colour of a battery zone.
#[must_use]
pub fn zone_color(zone: BatteryZone) -> &'static str {
    match zone {
        BatteryZone::Critical => CRITICAL_COLOR,
        BatteryZone::Safe => SAFE_COLOR,
        BatteryZone::Optimal => OPTIMAL_COLOR,
    }
}

#[must_use]
pub fn zone_label(zone: BatteryZone) -> &'static str {
    match zone {
        BatteryZone::Critical => "CRITICAL",
        BatteryZone::Safe => "SAFE",
        BatteryZone::Optimal => "OPTIMAL",
    }
}

#[must_use]
pub fn source_label(source: EnergySource) -> &'static str {
    match source {
        EnergySource::Solar => "USING SOLAR POWER",
        EnergySource::Battery => "USING BATTERY POWER",
        EnergySource::Grid => "USING GRID POWER",
    }
}

#[must_use]
pub fn battery_action_label(action: BatteryAction) -> &'static str {
    match action {
        BatteryAction::Charging => "Charging",
        BatteryAction::Idle => "Idle",
        BatteryAction::Discharging => "Discharging",
        BatteryAction::Protected => "Battery Protected",
    }
}

/// Build the view model for `decision` taken under `conditions`.
#[must_use]
pub fn present(conditions: &SystemConditions, decision: &EnergyDecision) -> ViewModel {
    ViewModel {
        source_label: source_label(decision.source),
        source_color: ACCENT_COLOR,
        battery_action_label: battery_action_label(decision.battery_action),
        battery_soc_label: format!("{}%", conditions.battery_soc_percent()),
        zone_label: zone_label(decision.battery_zone),
        zone_color: zone_color(decision.battery_zone),
        load_label: format!("{:.1} kW", conditions.load_demand_kw()),
        time_of_day_label: conditions.time_of_day().to_string(),
        net_flow_label: format!("{:.1} kW", decision.net_flow_kw),
        rationale: decision.rationale,
        chart: [
            ChartSeries {
                label: SOLAR_SERIES_LABEL,
                value: conditions.solar_power_kw(),
                color: ACCENT_COLOR,
            },
            ChartSeries {
                label: LOAD_SERIES_LABEL,
                value: conditions.load_demand_kw(),
                color: LOAD_BAR_COLOR,
            },
        ],
    }
}

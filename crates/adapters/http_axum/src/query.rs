//! Query-string form of the slider readings.

use serde::Deserialize;

use voltwise_domain::conditions::{ConditionsInput, TimeOfDay};

/// Slider readings from a query string; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ConditionsQuery {
    pub solar_power_kw: Option<f64>,
    pub load_demand_kw: Option<f64>,
    pub battery_soc_percent: Option<f64>,
    pub time_of_day: Option<TimeOfDay>,
}

impl ConditionsQuery {
    /// Fill missing readings from `defaults`.
    #[must_use]
    pub fn or_defaults(self, defaults: ConditionsInput) -> ConditionsInput {
        ConditionsInput {
            solar_power_kw: self.solar_power_kw.unwrap_or(defaults.solar_power_kw),
            load_demand_kw: self.load_demand_kw.unwrap_or(defaults.load_demand_kw),
            battery_soc_percent: self
                .battery_soc_percent
                .unwrap_or(defaults.battery_soc_percent),
            time_of_day: self.time_of_day.unwrap_or(defaults.time_of_day),
        }
    }
}

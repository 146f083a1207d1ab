//! System conditions — the four inputs the decision engine works from.
//!
//! Raw slider values arrive as a [`ConditionsInput`] and are resolved into
//! a [`SystemConditions`] under an [`InputPolicy`]. Only resolved conditions
//! ever reach [`decide`](crate::decision::decide), so the engine itself never
//! sees a negative power or an out-of-range state of charge.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseEnumError, ValidationError, VoltwiseError};

/// Upper bound of the state of charge, in percent.
pub const MAX_SOC_PERCENT: u8 = 100;

/// Time of day reported alongside the readings.
///
/// Display-only metadata: it never influences the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    #[default]
    Evening,
    Night,
}

impl TimeOfDay {
    /// All variants, in chronological order.
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Wire name, as used in query strings and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => f.write_str("Morning"),
            Self::Afternoon => f.write_str("Afternoon"),
            Self::Evening => f.write_str("Evening"),
            Self::Night => f.write_str("Night"),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|time| time.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "time of day",
                value: s.to_string(),
            })
    }
}

/// How out-of-range slider values are handled at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Pull negative powers up to zero and the state of charge into `0..=100`.
    #[default]
    Clamp,
    /// Fail with [`ValidationError::InvalidInput`] naming the offending field.
    Reject,
}

impl FromStr for InputPolicy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseEnumError {
                kind: "input policy",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => f.write_str("clamp"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// Unvalidated readings, exactly as the sliders produced them.
///
/// The state of charge is read as a float so that fractional or oversized
/// values still reach [`InputPolicy`] instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionsInput {
    pub solar_power_kw: f64,
    pub load_demand_kw: f64,
    pub battery_soc_percent: f64,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
}

impl Default for ConditionsInput {
    fn default() -> Self {
        Self {
            solar_power_kw: 5.0,
            load_demand_kw: 4.0,
            battery_soc_percent: 50.0,
            time_of_day: TimeOfDay::Evening,
        }
    }
}

impl ConditionsInput {
    /// Turn raw readings into [`SystemConditions`] under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`VoltwiseError::Validation`] when a reading is not a finite
    /// number, or, under [`InputPolicy::Reject`], when any reading falls
    /// outside its range or the state of charge is not a whole number.
    pub fn resolve(self, policy: InputPolicy) -> Result<SystemConditions, VoltwiseError> {
        let conditions = SystemConditions {
            solar_power_kw: resolve_power("solar_power_kw", self.solar_power_kw, policy)?,
            load_demand_kw: resolve_power("load_demand_kw", self.load_demand_kw, policy)?,
            battery_soc_percent: resolve_soc(self.battery_soc_percent, policy)?,
            time_of_day: self.time_of_day,
        };
        Ok(conditions)
    }
}

fn resolve_power(
    field: &'static str,
    value: f64,
    policy: InputPolicy,
) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidInput {
            field,
            reason: "must be a finite number",
        });
    }
    if value >= 0.0 {
        return Ok(value);
    }
    match policy {
        InputPolicy::Clamp => Ok(0.0),
        InputPolicy::Reject => Err(ValidationError::InvalidInput {
            field,
            reason: "must not be negative",
        }),
    }
}

fn resolve_soc(value: f64, policy: InputPolicy) -> Result<u8, ValidationError> {
    let invalid = |reason: &'static str| ValidationError::InvalidInput {
        field: "battery_soc_percent",
        reason,
    };
    if !value.is_finite() {
        return Err(invalid("must be a finite number"));
    }
    let max = f64::from(MAX_SOC_PERCENT);
    let value = match policy {
        InputPolicy::Clamp => value.round().clamp(0.0, max),
        InputPolicy::Reject if value.fract() != 0.0 => {
            return Err(invalid("must be a whole number"));
        }
        InputPolicy::Reject if (0.0..=max).contains(&value) => value,
        InputPolicy::Reject => return Err(invalid("must be within 0..=100")),
    };
    // Whole number within 0..=100 at this point.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = value as u8;
    Ok(percent)
}

/// Validated readings for one evaluation.
///
/// Invariants: both powers are finite and non-negative, and
/// `battery_soc_percent <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemConditions {
    solar_power_kw: f64,
    load_demand_kw: f64,
    battery_soc_percent: u8,
    time_of_day: TimeOfDay,
}

impl SystemConditions {
    /// Create a builder seeded with the default slider positions.
    #[must_use]
    pub fn builder() -> SystemConditionsBuilder {
        SystemConditionsBuilder::default()
    }

    #[must_use]
    pub fn solar_power_kw(&self) -> f64 {
        self.solar_power_kw
    }

    #[must_use]
    pub fn load_demand_kw(&self) -> f64 {
        self.load_demand_kw
    }

    #[must_use]
    pub fn battery_soc_percent(&self) -> u8 {
        self.battery_soc_percent
    }

    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }
}

/// Step-by-step builder for [`SystemConditions`].
#[derive(Debug, Default)]
pub struct SystemConditionsBuilder {
    input: ConditionsInput,
}

impl SystemConditionsBuilder {
    #[must_use]
    pub fn solar_power_kw(mut self, kw: f64) -> Self {
        self.input.solar_power_kw = kw;
        self
    }

    #[must_use]
    pub fn load_demand_kw(mut self, kw: f64) -> Self {
        self.input.load_demand_kw = kw;
        self
    }

    #[must_use]
    pub fn battery_soc_percent(mut self, percent: u8) -> Self {
        self.input.battery_soc_percent = f64::from(percent);
        self
    }

    #[must_use]
    pub fn time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.input.time_of_day = time_of_day;
        self
    }

    /// Consume the builder, validate strictly, and return [`SystemConditions`].
    ///
    /// # Errors
    ///
    /// Returns [`VoltwiseError::Validation`] if any value is out of range.
    pub fn build(self) -> Result<SystemConditions, VoltwiseError> {
        self.input.resolve(InputPolicy::Reject)
    }
}

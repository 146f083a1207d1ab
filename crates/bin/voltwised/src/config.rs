//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `voltwise.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use voltwise_domain::conditions::{ConditionsInput, InputPolicy, TimeOfDay};
use voltwise_domain::error::{ParseEnumError, ValidationError, VoltwiseError};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Decision controller settings.
    pub controller: ControllerConfig,
    /// Initial slider positions.
    pub simulator: SimulatorConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// `clamp` or `reject` out-of-range readings.
    pub input_policy: InputPolicy,
}

/// Readings shown when the dashboard is first opened.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub solar_power_kw: f64,
    pub load_demand_kw: f64,
    pub battery_soc_percent: f64,
    pub time_of_day: TimeOfDay,
}

impl SimulatorConfig {
    /// The configured readings as controller defaults.
    #[must_use]
    pub fn defaults(&self) -> ConditionsInput {
        ConditionsInput {
            solar_power_kw: self.solar_power_kw,
            load_demand_kw: self.load_demand_kw,
            battery_soc_percent: self.battery_soc_percent,
            time_of_day: self.time_of_day,
        }
    }
}

impl Config {
    /// Load configuration from `voltwise.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, an
    /// override cannot be parsed, or the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("voltwise.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("VOLTWISE_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("VOLTWISE_PORT") {
            self.server.port = parse_port(&val).map_err(|source| ConfigError::Env {
                var: "VOLTWISE_PORT",
                source,
            })?;
        }
        if let Some(val) = lookup("VOLTWISE_BIND") {
            let (host, port) = parse_bind(&val).map_err(|source| ConfigError::Env {
                var: "VOLTWISE_BIND",
                source,
            })?;
            self.server.host = host.to_string();
            self.server.port = port;
        }
        if let Some(val) = lookup("VOLTWISE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("VOLTWISE_INPUT_POLICY") {
            self.controller.input_policy =
                val.parse().map_err(|err: ParseEnumError| ConfigError::Env {
                    var: "VOLTWISE_INPUT_POLICY",
                    source: err.into(),
                })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if let Err(VoltwiseError::Validation(err)) =
            self.simulator.defaults().resolve(InputPolicy::Reject)
        {
            return Err(ConfigError::Simulator(err));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(val: &str) -> Result<u16, EnvValueError> {
    Ok(val.trim().parse()?)
}

fn parse_bind(val: &str) -> Result<(&str, u16), EnvValueError> {
    let (host, port) = val.rsplit_once(':').ok_or(EnvValueError::MissingPort)?;
    Ok((host, parse_port(port)?))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "voltwised=info,voltwise=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let defaults = ConditionsInput::default();
        Self {
            solar_power_kw: defaults.solar_power_kw,
            load_demand_kw: defaults.load_demand_kw,
            battery_soc_percent: defaults.battery_soc_percent,
            time_of_day: defaults.time_of_day,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Environment override that does not parse.
    #[error("invalid value in `{var}`")]
    Env {
        var: &'static str,
        source: EnvValueError,
    },
    /// Simulator defaults outside their ranges.
    #[error("invalid simulator defaults")]
    Simulator(#[source] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Why an environment override could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum EnvValueError {
    #[error(transparent)]
    Enum(#[from] ParseEnumError),
    #[error("invalid port")]
    Port(#[from] std::num::ParseIntError),
    #[error("expected `host:port`")]
    MissingPort,
}

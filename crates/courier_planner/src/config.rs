use jiff::tz::TimeZone;
use thiserror::Error;
use tracing::info;

use crate::{app::map_config::MapConfig, form::form_config::FormConfig};

pub const TIME_ZONE_ENV_VAR: &str = "COURIER_TIME_ZONE";
pub const REQUIRE_DELIVERY_DATE_ENV_VAR: &str = "COURIER_REQUIRE_DELIVERY_DATE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid time zone '{name}': {source}")]
    TimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Zone in which picked dates and times are interpreted.
    pub time_zone: TimeZone,
    pub form: FormConfig,
    pub map: MapConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            time_zone: TimeZone::system(),
            form: FormConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        PlannerConfig::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PlannerConfig::default();

        match lookup(TIME_ZONE_ENV_VAR) {
            Some(name) => {
                config.time_zone = TimeZone::get(&name)
                    .map_err(|source| ConfigError::TimeZone { name, source })?;
            }
            None => info!("{TIME_ZONE_ENV_VAR} not set, using the system time zone"),
        }

        if let Some(value) = lookup(REQUIRE_DELIVERY_DATE_ENV_VAR) {
            config.form.require_delivery_date = parse_bool(&value).ok_or(
                ConfigError::InvalidValue {
                    key: REQUIRE_DELIVERY_DATE_ENV_VAR,
                    value,
                },
            )?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

use jiff::{SignedDuration, SpanRelativeTo};
use thiserror::Error;
use tracing::info;

use crate::routing_service_client::RoutingServiceClientParams;

pub const ROUTING_SERVICE_URL_ENV_VAR: &str = "ROUTING_SERVICE_URL";
pub const ROUTING_SERVICE_TIMEOUT_ENV_VAR: &str = "ROUTING_SERVICE_TIMEOUT";

pub const DEFAULT_ROUTING_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: SignedDuration = SignedDuration::from_secs(60);

#[derive(Debug, Error)]
#[error("invalid value '{value}' for {key}: {message}")]
pub struct ClientConfigError {
    pub key: &'static str,
    pub value: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub url: String,
    /// `None` waits for the routing service indefinitely.
    pub timeout: Option<SignedDuration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: DEFAULT_ROUTING_SERVICE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ClientConfigError> {
        ClientConfig::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        match lookup(ROUTING_SERVICE_URL_ENV_VAR) {
            Some(url) if !url.trim().is_empty() => config.url = url.trim().to_string(),
            _ => info!(
                "{ROUTING_SERVICE_URL_ENV_VAR} not set, using {DEFAULT_ROUTING_SERVICE_URL}"
            ),
        }

        if let Some(value) = lookup(ROUTING_SERVICE_TIMEOUT_ENV_VAR) {
            config.timeout =
                parse_timeout(&value).map_err(|message| ClientConfigError {
                    key: ROUTING_SERVICE_TIMEOUT_ENV_VAR,
                    value,
                    message,
                })?;
        }

        Ok(config)
    }

    pub fn params(&self) -> RoutingServiceClientParams {
        RoutingServiceClientParams {
            url: self.url.clone(),
            timeout: self.timeout.map(|timeout| timeout.unsigned_abs()),
        }
    }
}

/// Accepts `off` for no timeout, otherwise any duration [`parse_duration`]
/// understands.
pub fn parse_timeout(input: &str) -> Result<Option<SignedDuration>, String> {
    if input.trim().eq_ignore_ascii_case("off") {
        return Ok(None);
    }

    let timeout = parse_duration(input)?;
    if timeout.is_zero() {
        return Err(String::from("Timeout must be positive"));
    }

    Ok(Some(timeout))
}

/// Friendly (`1m 30s`), ISO 8601 (`PT90S`) or a plain number of seconds.
pub fn parse_duration(input: &str) -> Result<SignedDuration, String> {
    let input = input.trim();

    if let Ok(duration) = input.parse::<SignedDuration>() {
        return Ok(duration.abs());
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration.abs());
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(SignedDuration::from_secs(seconds.abs()));
    }

    Err(format!("Invalid duration '{input}'"))
}

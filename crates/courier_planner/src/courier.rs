use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Capacities offered by the courier form, in kilograms.
pub const CAPACITY_PRESETS_KG: [u32; 6] = [100, 200, 500, 1000, 1500, 3000];

pub const DEFAULT_CAPACITY_KG: u32 = 100;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Driving,
        TransportMode::Walking,
        TransportMode::Bicycling,
        TransportMode::Transit,
    ];

    /// Average travel speed used to approximate durations when the routing
    /// service only gives us geometry.
    pub fn average_speed_kmh(&self) -> f64 {
        match self {
            TransportMode::Driving | TransportMode::Transit => 50.0,
            TransportMode::Walking => 4.0 * 1.6,
            TransportMode::Bicycling => 12.0 * 1.6,
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMode::Driving => "driving",
                TransportMode::Walking => "walking",
                TransportMode::Bicycling => "bicycling",
                TransportMode::Transit => "transit",
            }
        )
    }
}

/// A courier of the form's courier list. Its id is its position in that list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Courier {
    #[serde(deserialize_with = "deserialize_capacity")]
    pub capacity: u32,

    #[serde(default, alias = "transport")]
    pub transport_mode: TransportMode,
}

impl Courier {
    pub fn new(capacity: u32, transport_mode: TransportMode) -> Self {
        Courier {
            capacity,
            transport_mode,
        }
    }
}

impl Default for Courier {
    fn default() -> Self {
        Courier::new(DEFAULT_CAPACITY_KG, TransportMode::default())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CapacityInput {
    Number(u32),
    Text(String),
}

// The capacity dropdown hands us its key as a string.
fn deserialize_capacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match CapacityInput::deserialize(deserializer)? {
        CapacityInput::Number(capacity) => Ok(capacity),
        CapacityInput::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("capacity '{text}' is not a whole number"))
        }),
    }
}

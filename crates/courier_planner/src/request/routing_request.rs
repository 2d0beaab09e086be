use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::courier::TransportMode;

/// `[lat, lng]`
pub type WireLocation = [f64; 2];

/// `[start, end]` in epoch milliseconds.
pub type WireTimeWindow = [i64; 2];

/// Body of the request posted to the routing service.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct RoutingRequest {
    pub central_store: CentralStore,
    pub stores: Vec<Store>,
    pub couriers: Vec<WireCourier>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct CentralStore {
    pub location: WireLocation,
    pub time_window: Option<WireTimeWindow>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Store {
    pub location: WireLocation,
    pub demand: Option<u32>,
    pub time_window: Option<WireTimeWindow>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct WireCourier {
    pub pid: usize,
    pub capacity: u32,
    pub transport: TransportMode,
}

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    geo_point::{GeoPoint, GeoPointError},
    response::routing_response::{CourierRoute, RoutingResponse},
};

#[derive(Debug, Error, PartialEq)]
pub enum ResponseError {
    #[error("response has no dropped_nodes")]
    MissingDroppedNodes,

    #[error("route of courier {courier} is empty")]
    EmptyRoute { courier: usize },

    #[error("route key '{0}' is not a courier number")]
    InvalidCourierKey(String),

    #[error("invalid point in response: {0}")]
    InvalidPoint(#[from] GeoPointError),
}

/// A point as sent by the routing service: `{"lat", "lng"}` or `[lat, lng]`.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum WirePoint {
    Object { lat: f64, lng: f64 },
    Pair([f64; 2]),
}

impl TryFrom<WirePoint> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(value: WirePoint) -> Result<Self, Self::Error> {
        match value {
            WirePoint::Object { lat, lng } => GeoPoint::new(lat, lng),
            WirePoint::Pair([lat, lng]) => GeoPoint::new(lat, lng),
        }
    }
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct WireDetailedRoute {
    pub route: Vec<WirePoint>,
    pub detailed_route: Vec<WirePoint>,
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WireStopRoutes {
    List(Vec<Vec<WirePoint>>),
    /// Keyed by courier pid.
    ByCourier(BTreeMap<String, Vec<WirePoint>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    Legacy,
    Routes,
    Detailed,
}

/// Every response shape the routing service has produced.
///
/// UI code never looks at this type: it is normalized into a
/// [`RoutingResponse`] at the boundary.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WireResponse {
    Detailed {
        routes: Vec<WireDetailedRoute>,
        dropped_nodes: Option<Vec<WirePoint>>,
    },
    Routes {
        routes: WireStopRoutes,
        dropped_nodes: Option<Vec<WirePoint>>,
    },
    /// One list of stops per courier, nothing else.
    Legacy(Vec<Vec<WirePoint>>),
}

impl WireResponse {
    pub fn version(&self) -> SchemaVersion {
        match self {
            WireResponse::Detailed { .. } => SchemaVersion::Detailed,
            WireResponse::Routes { .. } => SchemaVersion::Routes,
            WireResponse::Legacy(_) => SchemaVersion::Legacy,
        }
    }

    pub fn normalize(self) -> Result<RoutingResponse, ResponseError> {
        match self {
            WireResponse::Detailed {
                routes,
                dropped_nodes,
            } => {
                let routes = routes
                    .into_iter()
                    .enumerate()
                    .map(|(courier, route)| {
                        courier_route(courier, route.route, Some(route.detailed_route))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(RoutingResponse::new(
                    routes,
                    points(dropped_nodes.ok_or(ResponseError::MissingDroppedNodes)?)?,
                ))
            }
            WireResponse::Routes {
                routes,
                dropped_nodes,
            } => {
                let routes = match routes {
                    WireStopRoutes::List(routes) => routes,
                    WireStopRoutes::ByCourier(routes) => by_courier(routes)?,
                };

                Ok(RoutingResponse::new(
                    stop_routes(routes)?,
                    points(dropped_nodes.ok_or(ResponseError::MissingDroppedNodes)?)?,
                ))
            }
            WireResponse::Legacy(routes) => Ok(RoutingResponse::new(stop_routes(routes)?, vec![])),
        }
    }
}

impl TryFrom<WireResponse> for RoutingResponse {
    type Error = ResponseError;

    fn try_from(value: WireResponse) -> Result<Self, Self::Error> {
        value.normalize()
    }
}

impl From<&RoutingResponse> for WireResponse {
    fn from(value: &RoutingResponse) -> Self {
        let wire_points = |points: &[GeoPoint]| {
            points
                .iter()
                .map(|point| WirePoint::Object {
                    lat: point.lat(),
                    lng: point.lng(),
                })
                .collect::<Vec<_>>()
        };

        WireResponse::Detailed {
            routes: value
                .routes()
                .iter()
                .map(|route| WireDetailedRoute {
                    route: wire_points(route.route()),
                    detailed_route: wire_points(route.detailed_route()),
                })
                .collect(),
            dropped_nodes: Some(wire_points(value.dropped_nodes())),
        }
    }
}

fn points(points: Vec<WirePoint>) -> Result<Vec<GeoPoint>, ResponseError> {
    points
        .into_iter()
        .map(|point| GeoPoint::try_from(point).map_err(ResponseError::from))
        .collect()
}

fn courier_route(
    courier: usize,
    route: Vec<WirePoint>,
    detailed_route: Option<Vec<WirePoint>>,
) -> Result<CourierRoute, ResponseError> {
    let route = points(route)?;
    // Older shapes carry no geometry: the path goes straight from stop to stop.
    let detailed_route = match detailed_route {
        Some(detailed_route) => points(detailed_route)?,
        None => route.clone(),
    };

    CourierRoute::new(route, detailed_route).ok_or(ResponseError::EmptyRoute { courier })
}

fn stop_routes(routes: Vec<Vec<WirePoint>>) -> Result<Vec<CourierRoute>, ResponseError> {
    routes
        .into_iter()
        .enumerate()
        .map(|(courier, route)| courier_route(courier, route, None))
        .collect()
}

fn by_courier(
    routes: BTreeMap<String, Vec<WirePoint>>,
) -> Result<Vec<Vec<WirePoint>>, ResponseError> {
    let mut keyed = routes
        .into_iter()
        .map(|(key, route)| match key.parse::<usize>() {
            Ok(pid) => Ok((pid, route)),
            Err(_) => Err(ResponseError::InvalidCourierKey(key)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    // String keys sort "10" before "2".
    keyed.sort_by_key(|(pid, _)| *pid);

    Ok(keyed.into_iter().map(|(_, route)| route).collect())
}

use jiff::SignedDuration;
use serde::Serialize;

use crate::{
    courier::{Courier, TransportMode},
    geo_point::GeoPoint,
    response::routing_response::RoutingResponse,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub courier: usize,
    pub transport_mode: TransportMode,
    pub stops: usize,
    pub distance_meters: f64,
    pub estimated_duration: SignedDuration,
}

/// Per-courier figures of a routing result. Durations are approximated from
/// the path length and the courier's transport mode.
pub fn summarize(response: &RoutingResponse, couriers: &[Courier]) -> Vec<RouteSummary> {
    response
        .routes()
        .iter()
        .enumerate()
        .map(|(courier, route)| {
            let transport_mode = couriers
                .get(courier)
                .map(|courier| courier.transport_mode)
                .unwrap_or_default();

            let path = if route.detailed_route().len() > 1 {
                route.detailed_route()
            } else {
                route.route()
            };
            let distance_meters = path_length(path);

            RouteSummary {
                courier,
                transport_mode,
                stops: route.stops().len(),
                distance_meters,
                estimated_duration: estimate_duration(distance_meters, transport_mode),
            }
        })
        .collect()
}

fn path_length(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].haversine_distance(&pair[1]))
        .sum()
}

fn estimate_duration(distance_meters: f64, transport_mode: TransportMode) -> SignedDuration {
    let meters_per_second = transport_mode.average_speed_kmh() * 1000.0 / 3600.0;
    SignedDuration::from_secs_f64(distance_meters / meters_per_second)
}

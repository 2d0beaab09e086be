use serde::Serialize;

use crate::geo_point::GeoPoint;

/// One courier's answer from the routing service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CourierRoute {
    route: Vec<GeoPoint>,
    detailed_route: Vec<GeoPoint>,
}

impl CourierRoute {
    /// `route` must start with the depot; `None` when it is empty.
    pub fn new(route: Vec<GeoPoint>, detailed_route: Vec<GeoPoint>) -> Option<Self> {
        if route.is_empty() {
            return None;
        }

        Some(CourierRoute {
            route,
            detailed_route,
        })
    }

    pub fn depot(&self) -> GeoPoint {
        self.route[0]
    }

    /// Serviced stops, depot excluded.
    pub fn stops(&self) -> &[GeoPoint] {
        &self.route[1..]
    }

    pub fn route(&self) -> &[GeoPoint] {
        &self.route
    }

    /// Road-following path; independent in length from [`CourierRoute::route`].
    pub fn detailed_route(&self) -> &[GeoPoint] {
        &self.detailed_route
    }
}

/// Normalized routing service response, whatever shape it came in.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct RoutingResponse {
    routes: Vec<CourierRoute>,
    dropped_nodes: Vec<GeoPoint>,
}

impl RoutingResponse {
    pub fn new(routes: Vec<CourierRoute>, dropped_nodes: Vec<GeoPoint>) -> Self {
        RoutingResponse {
            routes,
            dropped_nodes,
        }
    }

    /// Indexed by courier number.
    pub fn routes(&self) -> &[CourierRoute] {
        &self.routes
    }

    pub fn dropped_nodes(&self) -> &[GeoPoint] {
        &self.dropped_nodes
    }

    pub fn stop_count(&self) -> usize {
        self.routes.iter().map(|route| route.stops().len()).sum()
    }
}

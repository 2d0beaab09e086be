use geojson::FeatureCollection;
use serde::Serialize;

use crate::{
    delivery_point::DeliveryPoint,
    response::{
        marker::{Marker, MarkerKind, Polyline},
        palette::Palette,
        routing_response::RoutingResponse,
    },
};

/// Everything the map draws for a routing result.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct MapOverlay {
    pub depot: Option<Marker>,
    pub stops: Vec<Marker>,
    pub dropped_nodes: Vec<Marker>,
    pub paths: Vec<Polyline>,
}

impl MapOverlay {
    /// Paths first so that markers are drawn on top of them.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .paths
            .iter()
            .map(Polyline::to_feature)
            .chain(self.depot.iter().map(Marker::to_feature))
            .chain(self.stops.iter().map(Marker::to_feature))
            .chain(self.dropped_nodes.iter().map(Marker::to_feature))
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseMapper {
    palette: Palette,
}

impl ResponseMapper {
    pub fn new(palette: Palette) -> Self {
        ResponseMapper { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn to_markers(&self, response: &RoutingResponse) -> MapOverlay {
        let mut overlay = MapOverlay::default();

        for (courier, route) in response.routes().iter().enumerate() {
            let color = self.palette.courier(courier);

            // Every route starts at the same depot, later ones overdraw.
            overlay.depot = Some(Marker {
                position: route.depot(),
                kind: MarkerKind::Depot,
                color: self.palette.depot().clone(),
                label: "Depot".to_owned(),
            });

            overlay
                .stops
                .extend(route.route().iter().enumerate().skip(1).map(|(stop, &position)| {
                    Marker {
                        position,
                        kind: MarkerKind::Stop { courier, stop },
                        color: color.clone(),
                        label: format!("Courier {courier} number {stop}"),
                    }
                }));

            overlay.paths.push(Polyline {
                courier,
                color: color.clone(),
                points: route.detailed_route().to_vec(),
            });
        }

        overlay.dropped_nodes = response
            .dropped_nodes()
            .iter()
            .map(|&position| Marker {
                position,
                kind: MarkerKind::Dropped,
                color: self.palette.dropped().clone(),
                label: "Unreachable".to_owned(),
            })
            .collect();

        overlay
    }

    /// Markers for the form's points before anything was submitted.
    pub fn input_markers(&self, points: &[DeliveryPoint]) -> Vec<Marker> {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| Marker {
                position: point.location,
                kind: MarkerKind::Point { index },
                color: if index == 0 {
                    self.palette.depot().clone()
                } else {
                    self.palette.courier(0).clone()
                },
                label: format!("Point number {index}"),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        response::{routing_response::CourierRoute, wire_response::WireResponse},
        test_utils::point,
    };

    fn response(value: serde_json::Value) -> RoutingResponse {
        serde_json::from_value::<WireResponse>(value)
            .unwrap()
            .normalize()
            .unwrap()
    }

    #[test]
    fn test_single_route_with_dropped_node() {
        let response = response(json!({
            "routes": [{
                "route": [{"lat": 1, "lng": 1}, {"lat": 2, "lng": 2}],
                "detailed_route": [{"lat": 1, "lng": 1}, {"lat": 1.5, "lng": 1.5}, {"lat": 2, "lng": 2}],
            }],
            "dropped_nodes": [{"lat": 9, "lng": 9}],
        }));

        let overlay = ResponseMapper::default().to_markers(&response);

        let depot = overlay.depot.unwrap();
        assert_eq!(depot.position, point(1.0, 1.0));
        assert_eq!(depot.kind, MarkerKind::Depot);

        assert_eq!(overlay.stops.len(), 1);
        assert_eq!(overlay.stops[0].kind, MarkerKind::Stop { courier: 0, stop: 1 });
        assert_eq!(overlay.stops[0].label, "Courier 0 number 1");

        assert_eq!(overlay.dropped_nodes.len(), 1);
        assert_eq!(overlay.dropped_nodes[0].position, point(9.0, 9.0));
        assert_eq!(overlay.dropped_nodes[0].kind, MarkerKind::Dropped);

        assert_eq!(overlay.paths.len(), 1);
        assert_eq!(overlay.paths[0].points.len(), 3);
    }

    #[test]
    fn test_marker_counts() {
        let routes = [3usize, 1, 5, 2]
            .iter()
            .map(|&len| {
                let route = (0..len)
                    .map(|i| point(10.0 + i as f64, 20.0))
                    .collect::<Vec<_>>();
                CourierRoute::new(route, vec![]).unwrap()
            })
            .collect::<Vec<_>>();
        let dropped = vec![point(1.0, 1.0), point(2.0, 2.0)];
        let response = RoutingResponse::new(routes, dropped);

        let overlay = ResponseMapper::default().to_markers(&response);

        // (3 - 1) + (1 - 1) + (5 - 1) + (2 - 1)
        assert_eq!(overlay.stops.len(), 7);
        assert_eq!(overlay.stops.len(), response.stop_count());
        assert_eq!(overlay.dropped_nodes.len(), 2);
        assert!(overlay.depot.is_some());
    }

    #[test]
    fn test_single_depot_marker_last_route_wins() {
        let response = RoutingResponse::new(
            vec![
                CourierRoute::new(vec![point(1.0, 1.0), point(2.0, 2.0)], vec![]).unwrap(),
                CourierRoute::new(vec![point(1.5, 1.5), point(3.0, 3.0)], vec![]).unwrap(),
            ],
            vec![],
        );

        let overlay = ResponseMapper::default().to_markers(&response);
        assert_eq!(overlay.depot.unwrap().position, point(1.5, 1.5));
    }

    #[test]
    fn test_stop_colors_follow_palette_modulo() {
        let mapper = ResponseMapper::default();
        let size = mapper.palette().len();
        let routes = (0..=size)
            .map(|_| CourierRoute::new(vec![point(1.0, 1.0), point(2.0, 2.0)], vec![]).unwrap())
            .collect();

        let overlay = mapper.to_markers(&RoutingResponse::new(routes, vec![]));

        assert_eq!(overlay.stops[0].color, overlay.stops[size].color);
        assert_ne!(overlay.stops[0].color, overlay.stops[1].color);
        assert_eq!(overlay.paths[size].color, overlay.paths[0].color);
    }

    #[test]
    fn test_empty_response() {
        let overlay = ResponseMapper::default().to_markers(&RoutingResponse::default());
        assert_eq!(overlay, MapOverlay::default());
        assert!(overlay.to_feature_collection().features.is_empty());
    }

    #[test]
    fn test_feature_collection() {
        let response = response(json!([[[50.0, 30.0], [50.1, 30.1], [50.2, 30.2]]]));
        let collection = ResponseMapper::default()
            .to_markers(&response)
            .to_feature_collection();

        // 1 path, 1 depot, 2 stops
        assert_eq!(collection.features.len(), 4);

        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["features"][0]["geometry"]["type"], "LineString");
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"][0],
            json!([30.0, 50.0])
        );
        assert_eq!(value["features"][1]["properties"]["kind"], "depot");
        assert_eq!(value["features"][3]["properties"]["stop"], 2);
    }

    #[test]
    fn test_input_markers() {
        let points = vec![
            DeliveryPoint::new(point(50.0, 30.0)),
            DeliveryPoint::new(point(50.1, 30.1)),
        ];

        let markers = ResponseMapper::default().input_markers(&points);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].kind, MarkerKind::Point { index: 1 });
        assert_eq!(markers[1].label, "Point number 1");
    }
}

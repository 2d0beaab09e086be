use geojson::{Feature, Geometry, JsonObject};
use serde::Serialize;
use serde_json::Value;

use crate::{geo_point::GeoPoint, response::palette::Color};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerKind {
    /// A point of the form while editing.
    Point { index: usize },
    Depot,
    Stop { courier: usize, stop: usize },
    /// A point the routing service could not assign to any courier.
    Dropped,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: GeoPoint,
    #[serde(flatten)]
    pub kind: MarkerKind,
    pub color: Color,
    pub label: String,
}

impl Marker {
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        match self.kind {
            MarkerKind::Point { index } => {
                properties.insert("kind".to_owned(), Value::from("point"));
                properties.insert("index".to_owned(), Value::from(index));
            }
            MarkerKind::Depot => {
                properties.insert("kind".to_owned(), Value::from("depot"));
            }
            MarkerKind::Stop { courier, stop } => {
                properties.insert("kind".to_owned(), Value::from("stop"));
                properties.insert("courier".to_owned(), Value::from(courier));
                properties.insert("stop".to_owned(), Value::from(stop));
            }
            MarkerKind::Dropped => {
                properties.insert("kind".to_owned(), Value::from("dropped"));
            }
        }
        properties.insert("color".to_owned(), Value::from(self.color.as_str()));
        properties.insert("label".to_owned(), Value::from(self.label.as_str()));

        let point: geo::Point = self.position.into();

        Feature {
            geometry: Some(Geometry::new(geojson::Value::from(&point))),
            properties: Some(properties),
            ..Default::default()
        }
    }
}

/// Connecting path of one courier.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Polyline {
    pub courier: usize,
    pub color: Color,
    pub points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn to_feature(&self) -> Feature {
        let line = geo::LineString::new(self.points.iter().map(geo::Coord::from).collect());

        let mut properties = JsonObject::new();
        properties.insert("kind".to_owned(), Value::from("path"));
        properties.insert("courier".to_owned(), Value::from(self.courier));
        properties.insert("color".to_owned(), Value::from(self.color.as_str()));

        Feature {
            geometry: Some(Geometry::new(geojson::Value::from(&line))),
            properties: Some(properties),
            ..Default::default()
        }
    }
}

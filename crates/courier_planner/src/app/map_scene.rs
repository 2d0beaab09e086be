use geojson::FeatureCollection;
use serde::Serialize;

use crate::response::{marker::Marker, response_mapper::MapOverlay};

/// What the map shows at a given moment: either the form's points or a
/// routing result, never a mix of both.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "scene", content = "entities", rename_all = "snake_case")]
pub enum MapScene {
    Points(Vec<Marker>),
    Result(MapOverlay),
}

impl MapScene {
    pub fn to_feature_collection(&self) -> FeatureCollection {
        match self {
            MapScene::Points(markers) => FeatureCollection {
                bbox: None,
                features: markers.iter().map(Marker::to_feature).collect(),
                foreign_members: None,
            },
            MapScene::Result(overlay) => overlay.to_feature_collection(),
        }
    }
}

pub trait MapSurface {
    fn render(&mut self, scene: &MapScene);
}

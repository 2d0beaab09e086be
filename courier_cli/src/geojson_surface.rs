use courier_planner::app::{
    map_config::MapConfig,
    map_scene::{MapScene, MapSurface},
};
use geojson::FeatureCollection;

/// Map surface that keeps the last scene as GeoJSON, for writing to a file.
pub struct GeoJsonSurface {
    map: MapConfig,
    collection: Option<FeatureCollection>,
}

impl GeoJsonSurface {
    pub fn new(map: MapConfig) -> Self {
        GeoJsonSurface {
            map,
            collection: None,
        }
    }

    pub fn into_feature_collection(self) -> Option<FeatureCollection> {
        self.collection
    }
}

impl MapSurface for GeoJsonSurface {
    fn render(&mut self, scene: &MapScene) {
        let mut collection = scene.to_feature_collection();
        collection.foreign_members = Some(self.map.to_foreign_members());
        self.collection = Some(collection);
    }
}

#[cfg(test)]
mod tests {
    use courier_planner::{
        delivery_point::DeliveryPoint, geo_point::GeoPoint,
        response::response_mapper::ResponseMapper,
    };

    use super::*;

    #[test]
    fn test_keeps_last_scene() {
        let mapper = ResponseMapper::default();
        let depot = DeliveryPoint::new(GeoPoint::new(50.0, 30.0).unwrap());
        let mut surface = GeoJsonSurface::new(MapConfig::default());

        surface.render(&MapScene::Points(mapper.input_markers(&[depot.clone()])));
        surface.render(&MapScene::Points(mapper.input_markers(&[depot.clone(), depot])));

        let collection = surface.into_feature_collection().unwrap();
        assert_eq!(collection.features.len(), 2);
    }

    #[test]
    fn test_carries_map_view() {
        let map = MapConfig {
            center: GeoPoint::new(48.85, 2.35).unwrap(),
            zoom: 13,
        };
        let mut surface = GeoJsonSurface::new(map);
        surface.render(&MapScene::Points(vec![]));

        let value = serde_json::to_value(surface.into_feature_collection().unwrap()).unwrap();
        assert_eq!(value["map"]["center"], serde_json::json!([48.85, 2.35]));
        assert_eq!(value["map"]["zoom"], 13);
    }
}

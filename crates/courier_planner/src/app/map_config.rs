use geojson::JsonObject;
use serde_json::json;

use crate::geo_point::GeoPoint;

pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint::new_unchecked(50.45466, 30.5238);
pub const DEFAULT_MAP_ZOOM: u8 = 11;

/// Initial view of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl MapConfig {
    /// `{"map": {"center": [lat, lng], "zoom": z}}`, carried by exported
    /// feature collections so viewers open on the same view.
    pub fn to_foreign_members(&self) -> JsonObject {
        let mut members = JsonObject::new();
        members.insert(
            "map".to_owned(),
            json!({ "center": self.center.location(), "zoom": self.zoom }),
        );
        members
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: DEFAULT_MAP_CENTER,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

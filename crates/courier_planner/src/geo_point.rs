use geo::{Distance, Haversine};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeoPointError {
    #[error("latitude {0} is outside of [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside of [-180, 180]")]
    Longitude(f64),
}

/// Raw coordinates as they appear in form files and JSON payloads, before validation.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A validated WGS84 coordinate.
///
/// Points are immutable once created; editing a point on the map means
/// replacing it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "LatLng")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoPointError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoPointError::Latitude(lat));
        }

        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoPointError::Longitude(lng));
        }

        Ok(GeoPoint { lat, lng })
    }

    /// For constants known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `[lat, lng]`, the order the routing service expects.
    pub fn location(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    pub fn haversine_distance(&self, to: &GeoPoint) -> f64 {
        Haversine.distance(geo::Point::from(*self), geo::Point::from(*to))
    }
}

impl TryFrom<LatLng> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(value: LatLng) -> Result<Self, Self::Error> {
        GeoPoint::new(value.lat, value.lng)
    }
}

impl From<GeoPoint> for LatLng {
    fn from(value: GeoPoint) -> Self {
        LatLng {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}

impl From<&GeoPoint> for geo::Coord<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo::Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

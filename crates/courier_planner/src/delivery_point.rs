use jiff::{
    civil::{Date, Time},
    tz::TimeZone,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo_point::GeoPoint;

#[derive(Debug, Error)]
pub enum TimeWindowError {
    #[error("time window start {start} must be before end {end}")]
    StartNotBeforeEnd { start: Time, end: Time },

    #[error("cannot resolve time window on {date}: {source}")]
    Resolve {
        date: Date,
        #[source]
        source: jiff::Error,
    },
}

/// A time-of-day range picked independently of the delivery date.
///
/// Serialized as `["08:00", "12:30"]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "[Time; 2]", into = "[Time; 2]")]
pub struct TimeOfDayRange {
    start: Time,
    end: Time,
}

impl TimeOfDayRange {
    pub fn new(start: Time, end: Time) -> Result<Self, TimeWindowError> {
        if start >= end {
            return Err(TimeWindowError::StartNotBeforeEnd { start, end });
        }

        Ok(TimeOfDayRange { start, end })
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    /// Combines both bounds with `date` in `time_zone` and returns them as
    /// epoch milliseconds.
    pub fn resolve(&self, date: Date, time_zone: &TimeZone) -> Result<[i64; 2], TimeWindowError> {
        let to_millis = |time: Time| {
            date.to_datetime(time)
                .to_zoned(time_zone.clone())
                .map(|zoned| zoned.timestamp().as_millisecond())
                .map_err(|source| TimeWindowError::Resolve { date, source })
        };

        Ok([to_millis(self.start)?, to_millis(self.end)?])
    }
}

impl TryFrom<[Time; 2]> for TimeOfDayRange {
    type Error = TimeWindowError;

    fn try_from([start, end]: [Time; 2]) -> Result<Self, Self::Error> {
        TimeOfDayRange::new(start, end)
    }
}

impl From<TimeOfDayRange> for [Time; 2] {
    fn from(value: TimeOfDayRange) -> Self {
        [value.start, value.end]
    }
}

/// A point of the form's point list. The first point of the list is the depot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeliveryPoint {
    #[serde(flatten)]
    pub location: GeoPoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeOfDayRange>,
}

impl DeliveryPoint {
    pub fn new(location: GeoPoint) -> Self {
        DeliveryPoint {
            location,
            demand: None,
            time_window: None,
        }
    }

    pub fn with_demand(mut self, demand: u32) -> Self {
        self.demand = Some(demand);
        self
    }

    pub fn with_time_window(mut self, time_window: TimeOfDayRange) -> Self {
        self.time_window = Some(time_window);
        self
    }
}

impl From<GeoPoint> for DeliveryPoint {
    fn from(location: GeoPoint) -> Self {
        DeliveryPoint::new(location)
    }
}

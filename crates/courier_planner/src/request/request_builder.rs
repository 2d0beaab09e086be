use jiff::{Timestamp, civil::Date, tz::TimeZone};
use thiserror::Error;
use tracing::debug;

use crate::{
    courier::Courier,
    delivery_point::{DeliveryPoint, TimeOfDayRange, TimeWindowError},
    request::routing_request::{CentralStore, RoutingRequest, Store, WireCourier, WireTimeWindow},
};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("at least one point is required, the first one being the depot")]
    NoDepot,

    #[error("at least one courier is required")]
    NoCouriers,

    #[error("point #{index}: {source}")]
    TimeWindow {
        index: usize,
        #[source]
        source: TimeWindowError,
    },
}

/// Turns the form's points and couriers into the routing service's request
/// schema. Time windows are resolved in `time_zone`, on the delivery date or,
/// when none was picked, on the fallback date.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    time_zone: TimeZone,
    fallback_date: Option<Date>,
}

impl RequestBuilder {
    /// Without a pinned fallback date, undated time windows fall on the day
    /// the request is built, in `time_zone`.
    pub fn new(time_zone: TimeZone) -> Self {
        RequestBuilder {
            time_zone,
            fallback_date: None,
        }
    }

    pub fn with_fallback_date(mut self, fallback_date: Date) -> Self {
        self.fallback_date = Some(fallback_date);
        self
    }

    fn today(&self) -> Date {
        Timestamp::now().to_zoned(self.time_zone.clone()).date()
    }

    pub fn build(
        &self,
        points: &[DeliveryPoint],
        couriers: &[Courier],
        delivery_date: Option<Date>,
    ) -> Result<RoutingRequest, BuildError> {
        let (depot, stores) = points.split_first().ok_or(BuildError::NoDepot)?;

        if couriers.is_empty() {
            return Err(BuildError::NoCouriers);
        }

        let date = delivery_date
            .or(self.fallback_date)
            .unwrap_or_else(|| self.today());

        let central_store = CentralStore {
            location: depot.location.location(),
            time_window: self.resolve(depot.time_window.as_ref(), date, 0)?,
        };

        let stores = stores
            .iter()
            .enumerate()
            .map(|(index, point)| {
                Ok(Store {
                    location: point.location.location(),
                    demand: point.demand,
                    time_window: self.resolve(point.time_window.as_ref(), date, index + 1)?,
                })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        let couriers = couriers
            .iter()
            .enumerate()
            .map(|(pid, courier)| WireCourier {
                pid,
                capacity: courier.capacity,
                transport: courier.transport_mode,
            })
            .collect::<Vec<_>>();

        debug!(
            stores = stores.len(),
            couriers = couriers.len(),
            %date,
            "Built routing request"
        );

        Ok(RoutingRequest {
            central_store,
            stores,
            couriers,
        })
    }

    fn resolve(
        &self,
        time_window: Option<&TimeOfDayRange>,
        date: Date,
        index: usize,
    ) -> Result<Option<WireTimeWindow>, BuildError> {
        time_window
            .map(|range| range.resolve(date, &self.time_zone))
            .transpose()
            .map_err(|source| BuildError::TimeWindow { index, source })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};
    use serde_json::json;

    use super::*;
    use crate::{courier::TransportMode, test_utils::point};

    fn builder() -> RequestBuilder {
        RequestBuilder::new(TimeZone::UTC).with_fallback_date(date(2021, 3, 1))
    }

    fn morning() -> TimeOfDayRange {
        TimeOfDayRange::new(time(8, 0, 0, 0), time(10, 30, 0, 0)).unwrap()
    }

    #[test]
    fn test_build_minimal_request() {
        let points = vec![
            DeliveryPoint::new(point(50.0, 30.0)),
            DeliveryPoint::new(point(50.1, 30.1)).with_demand(5),
        ];
        let couriers = vec![Courier::new(100, TransportMode::Driving)];

        let request = builder().build(&points, &couriers, None).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "central_store": { "location": [50.0, 30.0], "time_window": null },
                "stores": [{ "location": [50.1, 30.1], "demand": 5, "time_window": null }],
                "couriers": [{ "pid": 0, "capacity": 100, "transport": "driving" }],
            })
        );
    }

    #[test]
    fn test_stores_exclude_depot_and_keep_order() {
        let points = (0..5)
            .map(|i| DeliveryPoint::new(point(50.0 + i as f64 * 0.01, 30.0)))
            .collect::<Vec<_>>();

        let request = builder()
            .build(&points, &[Courier::default()], None)
            .unwrap();

        assert_eq!(request.stores.len(), points.len() - 1);
        for (store, point) in request.stores.iter().zip(&points[1..]) {
            assert_eq!(store.location, point.location.location());
        }
    }

    #[test]
    fn test_depot_time_window_is_null_only_when_unset() {
        let couriers = [Courier::default()];

        let without = builder()
            .build(&[DeliveryPoint::new(point(50.0, 30.0))], &couriers, None)
            .unwrap();
        assert_eq!(without.central_store.time_window, None);

        let with = builder()
            .build(
                &[DeliveryPoint::new(point(50.0, 30.0)).with_time_window(morning())],
                &couriers,
                Some(date(2021, 3, 1)),
            )
            .unwrap();
        assert_eq!(
            with.central_store.time_window,
            Some([1_614_585_600_000, 1_614_594_600_000])
        );

        // No delivery date picked: the fallback date is used.
        let fallback = builder()
            .build(
                &[DeliveryPoint::new(point(50.0, 30.0)).with_time_window(morning())],
                &couriers,
                None,
            )
            .unwrap();
        assert_eq!(
            fallback.central_store.time_window,
            with.central_store.time_window
        );
    }

    #[test]
    fn test_unpinned_fallback_date_is_build_day() {
        let builder = RequestBuilder::new(TimeZone::UTC);
        let points = [DeliveryPoint::new(point(50.0, 30.0)).with_time_window(morning())];

        let before = Timestamp::now().to_zoned(TimeZone::UTC).date();
        let request = builder.build(&points, &[Courier::default()], None).unwrap();
        let after = Timestamp::now().to_zoned(TimeZone::UTC).date();

        let expected = |day: Date| morning().resolve(day, &TimeZone::UTC).ok();
        let window = request.central_store.time_window;
        assert!(window == expected(before) || window == expected(after));
    }

    #[test]
    fn test_store_time_window_uses_delivery_date() {
        let points = vec![
            DeliveryPoint::new(point(50.0, 30.0)),
            DeliveryPoint::new(point(50.1, 30.1)).with_time_window(morning()),
        ];

        let request = builder()
            .build(&points, &[Courier::default()], Some(date(2021, 3, 2)))
            .unwrap();

        let day = 24 * 60 * 60 * 1000;
        assert_eq!(
            request.stores[0].time_window,
            Some([1_614_585_600_000 + day, 1_614_594_600_000 + day])
        );
    }

    #[test]
    fn test_pid_is_position() {
        let couriers = vec![
            Courier::new(3000, TransportMode::Transit),
            Courier::new(100, TransportMode::Walking),
            Courier::new(500, TransportMode::Bicycling),
        ];
        let points = [DeliveryPoint::new(point(50.0, 30.0))];

        let request = builder().build(&points, &couriers, None).unwrap();
        for (pid, (wire, courier)) in request.couriers.iter().zip(&couriers).enumerate() {
            assert_eq!(wire.pid, pid);
            assert_eq!(wire.capacity, courier.capacity);
            assert_eq!(wire.transport, courier.transport_mode);
        }

        let mut reversed = couriers.clone();
        reversed.reverse();
        let request = builder().build(&points, &reversed, None).unwrap();
        assert_eq!(request.couriers[0].pid, 0);
        assert_eq!(request.couriers[0].transport, TransportMode::Bicycling);
    }

    #[test]
    fn test_preconditions() {
        assert!(matches!(
            builder().build(&[], &[Courier::default()], None),
            Err(BuildError::NoDepot)
        ));
        assert!(matches!(
            builder().build(&[DeliveryPoint::new(point(50.0, 30.0))], &[], None),
            Err(BuildError::NoCouriers)
        ));
    }
}

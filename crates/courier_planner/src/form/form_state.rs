use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    courier::Courier,
    delivery_point::DeliveryPoint,
    form::{
        form_config::FormConfig,
        validation::{ValidationErrors, validate},
    },
    geo_point::GeoPoint,
};

pub const DEFAULT_DEPOT: GeoPoint = GeoPoint::new_unchecked(50.4486941427873, 30.52272858686755);

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("the form needs a depot point")]
    MissingDepot,

    #[error("the depot cannot be removed or moved")]
    DepotImmutable,

    #[error("no point at index {index}, the form has {len}")]
    PointOutOfRange { index: usize, len: usize },

    #[error("no courier at index {index}, the form has {len}")]
    CourierOutOfRange { index: usize, len: usize },
}

/// Values of the submission form, as stored in form files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormValues {
    pub points: Vec<DeliveryPoint>,

    #[serde(default)]
    pub couriers: Vec<Courier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<Date>,
}

/// The form's current values plus the values it was created with, restored
/// on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: FormValues,
    initial: FormValues,
}

impl FormState {
    pub fn new(depot: GeoPoint) -> Self {
        let values = FormValues {
            points: vec![DeliveryPoint::new(depot)],
            couriers: vec![Courier::default()],
            delivery_date: None,
        };

        FormState {
            initial: values.clone(),
            values,
        }
    }

    pub fn from_values(values: FormValues) -> Result<Self, FormError> {
        if values.points.is_empty() {
            return Err(FormError::MissingDepot);
        }

        Ok(FormState {
            initial: values.clone(),
            values,
        })
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn points(&self) -> &[DeliveryPoint] {
        &self.values.points
    }

    pub fn depot(&self) -> &DeliveryPoint {
        &self.values.points[0]
    }

    pub fn couriers(&self) -> &[Courier] {
        &self.values.couriers
    }

    pub fn delivery_date(&self) -> Option<Date> {
        self.values.delivery_date
    }

    pub fn push_point(&mut self, point: DeliveryPoint) {
        self.values.points.push(point);
    }

    pub fn remove_point(&mut self, index: usize) -> Result<DeliveryPoint, FormError> {
        if index == 0 {
            return Err(FormError::DepotImmutable);
        }

        let len = self.values.points.len();
        if index >= len {
            return Err(FormError::PointOutOfRange { index, len });
        }

        Ok(self.values.points.remove(index))
    }

    pub fn push_courier(&mut self, courier: Courier) {
        self.values.couriers.push(courier);
    }

    /// Later couriers shift down, so their ids change.
    pub fn remove_courier(&mut self, index: usize) -> Result<Courier, FormError> {
        let len = self.values.couriers.len();
        if index >= len {
            return Err(FormError::CourierOutOfRange { index, len });
        }

        Ok(self.values.couriers.remove(index))
    }

    pub fn set_delivery_date(&mut self, delivery_date: Option<Date>) {
        self.values.delivery_date = delivery_date;
    }

    pub fn validate(&self, config: &FormConfig) -> Result<(), ValidationErrors> {
        validate(&self.values, config)
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new(DEFAULT_DEPOT)
    }
}

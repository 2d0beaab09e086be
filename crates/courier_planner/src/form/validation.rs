use thiserror::Error;

use crate::form::{form_config::FormConfig, form_state::FormValues};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("at least one courier is required")]
    NoCouriers,

    #[error("the depot cannot have a demand")]
    DepotDemand,

    #[error("a delivery date is required")]
    MissingDeliveryDate,

    #[error("courier #{courier} has no capacity")]
    ZeroCapacity { courier: usize },
}

#[derive(Debug, Error, PartialEq)]
#[error("{}", join(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks done before a submission may leave the form.
pub fn validate(values: &FormValues, config: &FormConfig) -> Result<(), ValidationErrors> {
    let mut errors = vec![];

    if values.couriers.is_empty() {
        errors.push(ValidationError::NoCouriers);
    }

    if values.points.first().is_some_and(|depot| depot.demand.is_some()) {
        errors.push(ValidationError::DepotDemand);
    }

    if config.require_delivery_date && values.delivery_date.is_none() {
        errors.push(ValidationError::MissingDeliveryDate);
    }

    errors.extend(
        values
            .couriers
            .iter()
            .enumerate()
            .filter(|(_, courier)| courier.capacity == 0)
            .map(|(courier, _)| ValidationError::ZeroCapacity { courier }),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

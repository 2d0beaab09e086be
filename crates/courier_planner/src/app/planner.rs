use thiserror::Error;
use tracing::{info, warn};

use crate::{
    app::{
        app_state::{AppState, DisplayMode},
        map_scene::{MapScene, MapSurface},
        routing_backend::RoutingBackend,
    },
    delivery_point::DeliveryPoint,
    form::{form_config::FormConfig, form_state::FormState, validation::ValidationErrors},
    geo_point::GeoPoint,
    request::{
        request_builder::{BuildError, RequestBuilder},
        routing_request::RoutingRequest,
    },
    response::{
        response_mapper::{MapOverlay, ResponseMapper},
        routing_response::RoutingResponse,
    },
};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("no submission is in flight")]
    NoSubmissionInFlight,

    #[error("invalid form: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("routing service failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Single owner of the application state. Drives
/// editing → submitting → showing result, and back to editing on reset.
pub struct Planner<B> {
    backend: B,
    state: AppState,
    builder: RequestBuilder,
    mapper: ResponseMapper,
    form_config: FormConfig,
}

impl<B> Planner<B>
where
    B: RoutingBackend,
{
    pub fn new(
        backend: B,
        form: FormState,
        builder: RequestBuilder,
        mapper: ResponseMapper,
        form_config: FormConfig,
    ) -> Self {
        Planner {
            backend,
            state: AppState::new(form),
            builder,
            mapper,
            form_config,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        self.state.form_mut()
    }

    pub fn mapper(&self) -> &ResponseMapper {
        &self.mapper
    }

    /// Map click: appends a point at the end of the form.
    pub fn click(&mut self, location: GeoPoint) {
        self.state.form_mut().push_point(DeliveryPoint::new(location));
    }

    /// Validates the form and builds the request; the state is Submitting
    /// until [`Planner::finish_submit`] is called.
    pub fn begin_submit(&mut self) -> Result<RoutingRequest, PlannerError> {
        if self.state.mode() == DisplayMode::Submitting {
            return Err(PlannerError::SubmissionInFlight);
        }

        let form = self.state.form();
        form.validate(&self.form_config)?;
        let request = self
            .builder
            .build(form.points(), form.couriers(), form.delivery_date())?;

        self.state.start_submitting();
        info!(
            stores = request.stores.len(),
            couriers = request.couriers.len(),
            "Submitting routing request"
        );

        Ok(request)
    }

    /// Applies the routing service's answer. Failures return to editing
    /// without any result: the previous one was dropped when the submission
    /// started.
    pub fn finish_submit<E>(
        &mut self,
        result: Result<RoutingResponse, E>,
    ) -> Result<&MapOverlay, PlannerError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        if self.state.mode() != DisplayMode::Submitting {
            warn!("Discarding routing result, no submission in flight");
            return Err(PlannerError::NoSubmissionInFlight);
        }

        match result {
            Ok(response) => {
                let overlay = self.mapper.to_markers(&response);
                info!(
                    routes = response.routes().len(),
                    stops = overlay.stops.len(),
                    dropped = overlay.dropped_nodes.len(),
                    "Routing result received"
                );
                Ok(self.state.show_result(response, overlay))
            }
            Err(error) => {
                self.state.cancel_submitting();
                Err(PlannerError::Backend(Box::new(error)))
            }
        }
    }

    pub async fn submit(&mut self) -> Result<&MapOverlay, PlannerError> {
        let request = self.begin_submit()?;
        let result = self.backend.route(&request).await;
        self.finish_submit(result)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn scene(&self) -> MapScene {
        self.state.scene(&self.mapper)
    }

    pub fn render(&self, surface: &mut impl MapSurface) {
        surface.render(&self.scene());
    }
}

use std::future::Future;

use crate::{request::routing_request::RoutingRequest, response::routing_response::RoutingResponse};

/// The remote service that computes routes.
pub trait RoutingBackend {
    type Error: std::error::Error + Send + Sync + 'static;

    fn route(
        &self,
        request: &RoutingRequest,
    ) -> impl Future<Output = Result<RoutingResponse, Self::Error>> + Send;
}

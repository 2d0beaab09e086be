use std::time::Duration;

use courier_planner::{
    app::routing_backend::RoutingBackend,
    request::routing_request::RoutingRequest,
    response::{
        routing_response::RoutingResponse,
        wire_response::{ResponseError, WireResponse},
    },
};
use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Routing service error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid routing response: {0}")]
    Response(#[from] ResponseError),
}

pub struct RoutingServiceClientParams {
    pub url: String,
    pub timeout: Option<Duration>,
}

pub struct RoutingServiceClient {
    params: RoutingServiceClientParams,
    client: reqwest::Client,
}

impl RoutingServiceClient {
    pub fn new(params: RoutingServiceClientParams) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            params,
        })
    }

    pub fn url(&self) -> &str {
        &self.params.url
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn submit(&self, request: &RoutingRequest) -> Result<RoutingResponse, ClientError> {
        debug!(
            url = %self.params.url,
            stores = request.stores.len(),
            couriers = request.couriers.len(),
            "RoutingService: Posting routing request"
        );

        let response = self
            .client
            .post(&self.params.url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<RoutingResponse, ClientError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            let wire: WireResponse = serde_json::from_slice(&body)?;
            debug!(version = ?wire.version(), "RoutingService: Received routing response");

            Ok(wire.normalize()?)
        } else {
            let message = response.text().await.unwrap_or_default();
            let status = status.as_u16();

            if status >= 500 {
                Err(ClientError::Server { status, message })
            } else {
                Err(ClientError::Api { status, message })
            }
        }
    }
}

impl RoutingBackend for RoutingServiceClient {
    type Error = ClientError;

    async fn route(&self, request: &RoutingRequest) -> Result<RoutingResponse, Self::Error> {
        self.submit(request).await
    }
}

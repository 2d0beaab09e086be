use std::path::PathBuf;

use clap::Args;
use courier_client::{config::ClientConfig, routing_service_client::RoutingServiceClient};
use courier_planner::{
    app::planner::Planner,
    config::PlannerConfig,
    request::request_builder::RequestBuilder,
    response::{
        response_mapper::ResponseMapper, route_summary::summarize, wire_response::WireResponse,
    },
};
use jiff::{SignedDuration, civil::Date, tz::TimeZone};
use tracing::info;

use crate::{
    file_utils::{read_form, write_json},
    geojson_surface::GeoJsonSurface,
    parsers,
    summary_table::summary_table,
};

#[derive(Args)]
pub struct PlanArgs {
    /// Form file: points (depot first), couriers and delivery date
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the GeoJSON overlay, stdout otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delivery date overriding the form's (e.g. "2021-03-01")
    #[arg(long, value_parser = parsers::parse_date)]
    date: Option<Date>,

    /// IANA time zone the time windows are picked in
    #[arg(long, value_parser = parsers::parse_time_zone)]
    time_zone: Option<TimeZone>,

    /// Routing service endpoint, overrides ROUTING_SERVICE_URL
    #[arg(long)]
    url: Option<String>,

    /// Request timeout (e.g., "30s", "5m", "PT1M"), overrides ROUTING_SERVICE_TIMEOUT
    #[arg(short, long, value_parser = parsers::parse_duration)]
    timeout: Option<SignedDuration>,

    /// Wait for the routing service without any timeout
    #[arg(long, conflicts_with = "timeout")]
    no_timeout: bool,

    /// Also save the routing service's answer, for `courier render`
    #[arg(long)]
    response: Option<PathBuf>,
}

pub async fn run(args: PlanArgs, config: &PlannerConfig) -> Result<(), anyhow::Error> {
    let mut client_config = ClientConfig::from_env()?;
    if let Some(url) = args.url {
        client_config.url = url;
    }
    if args.no_timeout {
        client_config.timeout = None;
    } else if args.timeout.is_some() {
        client_config.timeout = args.timeout;
    }

    let mut form = read_form(&args.input)?;
    if args.date.is_some() {
        form.set_delivery_date(args.date);
    }
    let couriers = form.couriers().to_vec();

    let time_zone = args.time_zone.unwrap_or_else(|| config.time_zone.clone());
    let client = RoutingServiceClient::new(client_config.params())?;
    info!(url = client.url(), "Planning routes from {:?}", args.input);

    let mut planner = Planner::new(
        client,
        form,
        RequestBuilder::new(time_zone),
        ResponseMapper::default(),
        config.form.clone(),
    );
    planner.submit().await?;

    let mut surface = GeoJsonSurface::new(config.map.clone());
    planner.render(&mut surface);
    if let Some(collection) = surface.into_feature_collection() {
        write_json(args.output.as_ref(), &collection)?;
    }

    if let Some(response) = planner.state().last_response() {
        if let Some(path) = &args.response {
            write_json(Some(path), &WireResponse::from(response))?;
        }

        let summaries = summarize(response, &couriers);
        eprintln!(
            "{}",
            summary_table(&summaries, response.dropped_nodes().len())
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, net::SocketAddr};

    use axum::{Json, Router, routing::post};
    use serde_json::{Value, json};

    use super::*;
    use crate::file_utils::read_json;

    /// Serves every store in order with one courier, dropping nothing.
    async fn route_everything(Json(body): Json<Value>) -> Json<Value> {
        let mut route = vec![body["central_store"]["location"].clone()];
        if let Some(stores) = body["stores"].as_array() {
            route.extend(stores.iter().map(|store| store["location"].clone()));
        }

        Json(json!({
            "routes": [{ "route": route, "detailed_route": route }],
            "dropped_nodes": [],
        }))
    }

    async fn failing() -> (axum::http::StatusCode, &'static str) {
        (axum::http::StatusCode::SERVICE_UNAVAILABLE, "down")
    }

    async fn spawn_routing_service() -> SocketAddr {
        let app = Router::new()
            .route("/solve", post(route_everything))
            .route("/failing", post(failing));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        addr
    }

    fn args(addr: SocketAddr, path: &str, output: PathBuf, response: PathBuf) -> PlanArgs {
        PlanArgs {
            input: env::current_dir().unwrap().join("tests/fixtures/form.json"),
            output: Some(output),
            date: None,
            time_zone: Some(TimeZone::UTC),
            url: Some(format!("http://{addr}{path}")),
            timeout: Some(SignedDuration::from_secs(5)),
            no_timeout: false,
            response: Some(response),
        }
    }

    #[tokio::test]
    async fn test_plan_writes_overlay_and_response() {
        let addr = spawn_routing_service().await;
        let id = std::process::id();
        let output = env::temp_dir().join(format!("courier-plan-{id}.geojson"));
        let saved = env::temp_dir().join(format!("courier-plan-{id}.json"));

        run(
            args(addr, "/solve", output.clone(), saved.clone()),
            &PlannerConfig::default(),
        )
        .await
        .unwrap();

        let collection: Value = read_json(&output).unwrap();
        let wire: WireResponse = read_json(&saved).unwrap();
        std::fs::remove_file(&output).unwrap();
        std::fs::remove_file(&saved).unwrap();

        // 1 path, the depot and the form's 3 stores
        assert_eq!(collection["features"].as_array().map(Vec::len), Some(5));
        assert_eq!(collection["map"]["zoom"], 11);

        let response = wire.normalize().unwrap();
        assert_eq!(response.stop_count(), 3);
        assert!(response.dropped_nodes().is_empty());
    }

    #[tokio::test]
    async fn test_plan_surfaces_service_failure() {
        let addr = spawn_routing_service().await;
        let id = std::process::id();
        let output = env::temp_dir().join(format!("courier-plan-failing-{id}.geojson"));
        let saved = env::temp_dir().join(format!("courier-plan-failing-{id}.json"));

        let error = run(
            args(addr, "/failing", output.clone(), saved.clone()),
            &PlannerConfig::default(),
        )
        .await
        .unwrap_err();

        assert!(error.to_string().starts_with("routing service failed"));
        assert!(!output.exists());
        assert!(!saved.exists());
    }
}

use std::path::PathBuf;

use clap::Args;
use courier_planner::{
    app::map_scene::{MapScene, MapSurface},
    config::PlannerConfig,
    courier::Courier,
    response::{
        response_mapper::ResponseMapper, route_summary::summarize, wire_response::WireResponse,
    },
};
use tracing::info;

use crate::{
    file_utils::{read_form, read_json, write_json},
    geojson_surface::GeoJsonSurface,
    summary_table::summary_table,
};

#[derive(Args)]
pub struct RenderArgs {
    /// Routing service response, in any shape the service has produced
    #[arg(short, long)]
    input: PathBuf,

    /// Form file the response was computed for, used for transport modes
    #[arg(short, long)]
    form: Option<PathBuf>,

    /// Where to write the GeoJSON overlay, stdout otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: RenderArgs, config: &PlannerConfig) -> Result<(), anyhow::Error> {
    let wire: WireResponse = read_json(&args.input)?;
    info!(version = ?wire.version(), "Rendering response from {:?}", args.input);

    let response = wire.normalize()?;
    let couriers: Vec<Courier> = match &args.form {
        Some(path) => read_form(path)?.couriers().to_vec(),
        None => vec![],
    };

    let overlay = ResponseMapper::default().to_markers(&response);
    let mut surface = GeoJsonSurface::new(config.map.clone());
    surface.render(&MapScene::Result(overlay));
    if let Some(collection) = surface.into_feature_collection() {
        write_json(args.output.as_ref(), &collection)?;
    }

    let summaries = summarize(&response, &couriers);
    eprintln!(
        "{}",
        summary_table(&summaries, response.dropped_nodes().len())
    );

    Ok(())
}

use clap::{Parser, Subcommand};
use courier_planner::config::PlannerConfig;
use mimalloc::MiMalloc;
use tracing::debug;

use crate::{plan::PlanArgs, render::RenderArgs, request::RequestArgs, schema::SchemaArgs};

mod file_utils;
mod geojson_surface;
mod parsers;
mod plan;
mod render;
mod request;
mod schema;
mod summary_table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form file and print the routing request built from it
    #[command(visible_alias = "r")]
    Request {
        #[command(flatten)]
        args: RequestArgs,
    },
    /// Submit a form file to the routing service and export the result
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Map a saved routing service response
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },
    /// Print the JSON schema of the routing service's wire formats
    Schema {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = PlannerConfig::from_env()?;
    debug!(time_zone = ?config.time_zone.iana_name(), "Loaded configuration");

    match cli.command {
        Commands::Request { args } => request::run(args, &config)?,
        Commands::Plan { args } => plan::run(args, &config).await?,
        Commands::Render { args } => render::run(args, &config)?,
        Commands::Schema { args } => schema::run(args)?,
    }

    Ok(())
}

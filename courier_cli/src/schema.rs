use clap::{Args, ValueEnum};
use courier_planner::{
    request::routing_request::RoutingRequest, response::wire_response::WireResponse,
};
use schemars::schema_for;

use crate::file_utils::write_json;

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaKind {
    /// Body posted to the routing service
    Request,
    /// Every response shape the routing service may answer with
    Response,
}

#[derive(Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    kind: SchemaKind,
}

pub fn run(args: SchemaArgs) -> Result<(), anyhow::Error> {
    let schema = match args.kind {
        SchemaKind::Request => schema_for!(RoutingRequest),
        SchemaKind::Response => schema_for!(WireResponse),
    };

    write_json(None, &schema)
}

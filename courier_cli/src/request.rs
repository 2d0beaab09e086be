use std::path::PathBuf;

use clap::Args;
use courier_planner::{config::PlannerConfig, request::request_builder::RequestBuilder};
use jiff::{civil::Date, tz::TimeZone};
use tracing::info;

use crate::{
    file_utils::{read_form, write_json},
    parsers,
};

#[derive(Args)]
pub struct RequestArgs {
    /// Form file: points (depot first), couriers and delivery date
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the request, stdout otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delivery date overriding the form's (e.g. "2021-03-01")
    #[arg(long, value_parser = parsers::parse_date)]
    date: Option<Date>,

    /// IANA time zone the time windows are picked in
    #[arg(long, value_parser = parsers::parse_time_zone)]
    time_zone: Option<TimeZone>,
}

pub fn run(args: RequestArgs, config: &PlannerConfig) -> Result<(), anyhow::Error> {
    let mut form = read_form(&args.input)?;
    if args.date.is_some() {
        form.set_delivery_date(args.date);
    }

    form.validate(&config.form)?;

    let time_zone = args.time_zone.unwrap_or_else(|| config.time_zone.clone());
    let request = RequestBuilder::new(time_zone).build(
        form.points(),
        form.couriers(),
        form.delivery_date(),
    )?;

    info!(
        stores = request.stores.len(),
        couriers = request.couriers.len(),
        "Built routing request from {:?}",
        args.input
    );

    write_json(args.output.as_ref(), &request)
}

use comfy_table::{Table, presets::UTF8_FULL};
use courier_planner::response::route_summary::RouteSummary;
use jiff::SignedDuration;

pub fn summary_table(summaries: &[RouteSummary], dropped_nodes: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Courier",
        "Transport",
        "Stops",
        "Distance (km)",
        "Estimated duration",
    ]);

    for summary in summaries {
        table.add_row(vec![
            summary.courier.to_string(),
            summary.transport_mode.to_string(),
            summary.stops.to_string(),
            format!("{:.2}", summary.distance_meters / 1000.0),
            format_duration(summary.estimated_duration),
        ]);
    }

    if dropped_nodes > 0 {
        table.add_row(vec![
            String::from("unreachable"),
            String::new(),
            dropped_nodes.to_string(),
            String::new(),
            String::new(),
        ]);
    }

    table
}

/// Whole seconds, in the friendly format (`1h 5m 3s`).
fn format_duration(duration: SignedDuration) -> String {
    format!("{:#}", SignedDuration::from_secs(duration.as_secs()))
}

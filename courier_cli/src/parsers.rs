use jiff::{civil::Date, tz::TimeZone};

pub use courier_client::config::parse_duration;

pub fn parse_date(input: &str) -> Result<Date, String> {
    input
        .trim()
        .parse::<Date>()
        .map_err(|_| format!("Invalid date '{input}', expected YYYY-MM-DD"))
}

pub fn parse_time_zone(input: &str) -> Result<TimeZone, String> {
    TimeZone::get(input.trim()).map_err(|error| error.to_string())
}

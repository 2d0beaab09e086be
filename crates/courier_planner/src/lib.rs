pub mod app;
pub mod config;
pub mod courier;
pub mod delivery_point;
pub mod form;
pub mod geo_point;
pub mod request;
pub mod response;

#[cfg(test)]
pub(crate) mod test_utils;

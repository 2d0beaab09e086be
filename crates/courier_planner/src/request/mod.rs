pub mod request_builder;
pub mod routing_request;

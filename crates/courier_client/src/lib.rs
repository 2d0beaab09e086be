pub mod config;
pub mod routing_service_client;

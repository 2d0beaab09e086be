pub mod marker;
pub mod palette;
pub mod response_mapper;
pub mod route_summary;
pub mod routing_response;
pub mod wire_response;

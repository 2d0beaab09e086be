pub mod app_state;
pub mod map_config;
pub mod map_scene;
pub mod planner;
pub mod routing_backend;

pub mod form_config;
pub mod form_state;
pub mod validation;

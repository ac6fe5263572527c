pub mod backends;
pub mod configuration_source;
pub mod controller_config;

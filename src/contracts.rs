pub mod controller_details;
pub mod controller_environment;

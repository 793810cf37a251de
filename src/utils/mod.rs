pub mod constants;
pub mod env;
pub mod match_config;

pub mod algorithm;
pub mod koch_config;

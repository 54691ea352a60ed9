pub mod algorithm;
pub mod cesaro_config;

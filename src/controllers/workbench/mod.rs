pub mod actions;
pub mod errors;
#[allow(clippy::module_inception)]
pub mod workbench;

#[allow(clippy::module_inception)]
pub mod orchestrator;
pub mod task_spec;

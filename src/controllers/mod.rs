pub mod events;
pub mod orchestrator;
pub mod ports;
pub mod session;
pub mod workbench;

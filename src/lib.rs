mod controllers;
mod core;
mod presenters;

pub use controllers::events::update_event::UpdateEvent;
pub use controllers::orchestrator::orchestrator::Orchestrator;
pub use controllers::orchestrator::task_spec::TaskSpec;
pub use controllers::ports::presenter_port::PresenterPort;
pub use controllers::session::pending::Pending;
pub use controllers::session::session::FractalSession;
pub use controllers::session::session_config::{SessionConfig, SessionConfigError};
pub use controllers::session::session_id::SessionId;
pub use controllers::session::update_context::UpdateContext;
pub use controllers::workbench::actions::BatchAction;
pub use controllers::workbench::errors::TriggerError;
pub use controllers::workbench::workbench::{PREVIEW_DEPTHS, Workbench, WorkbenchConfig};

pub use crate::core::actions::generate_curve::generate_curve::{generate_curve, generate_requested_curve};
pub use crate::core::data::fractal_params::{BoundedParameters, FractalParameters, ParameterError};
pub use crate::core::data::point::Point;
pub use crate::core::data::vertex_sequence::VertexSequence;
pub use crate::core::fractals::curve_kinds::CurveKinds;

pub use presenters::log::presenter::LogPresenter;

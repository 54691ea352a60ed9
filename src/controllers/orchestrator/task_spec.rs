use crate::controllers::session::session::FractalSession;
use crate::core::data::fractal_params::FractalParameters;

/// One unit of batch work: compute `params` into `session`.
#[derive(Clone)]
pub struct TaskSpec {
    pub session: FractalSession,
    pub params: Option<FractalParameters>,
}

impl TaskSpec {
    #[must_use]
    pub fn new(session: &FractalSession, params: Option<FractalParameters>) -> Self {
        Self {
            session: session.clone(),
            params,
        }
    }
}

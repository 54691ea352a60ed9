use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use crate::controllers::orchestrator::orchestrator::Orchestrator;
use crate::controllers::orchestrator::task_spec::TaskSpec;
use crate::controllers::ports::presenter_port::PresenterPort;
use crate::controllers::session::session::FractalSession;
use crate::controllers::session::session_config::SessionConfig;
use crate::controllers::session::update_context::UpdateContext;
use crate::controllers::workbench::actions::BatchAction;
use crate::controllers::workbench::errors::TriggerError;
use crate::core::data::fractal_params::FractalParameters;
use crate::core::fractals::curve_kinds::CurveKinds;

pub const DEFAULT_ITERATIONS: i64 = 10;
pub const DEFAULT_ANGLE_DIVISOR: i64 = 4;

/// Fixed depths of the preview slots, all drawn with [`PREVIEW_ANGLE_DIVISOR`].
pub const PREVIEW_DEPTHS: [i64; 5] = [9, 8, 7, 5, 1];
pub const PREVIEW_ANGLE_DIVISOR: i64 = 4;

// The preview that joins the primary curve in the sequential pair.
const PAIR_PREVIEW_DEPTH: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkbenchConfig {
    pub curve: CurveKinds,
    pub iterations: Option<i64>,
    pub angle_divisor: Option<i64>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            curve: CurveKinds::default(),
            iterations: Some(DEFAULT_ITERATIONS),
            angle_divisor: Some(DEFAULT_ANGLE_DIVISOR),
        }
    }
}

struct Preview {
    depth: i64,
    session: FractalSession,
}

impl Preview {
    fn task(&self) -> TaskSpec {
        TaskSpec::new(
            &self.session,
            Some(FractalParameters::new(self.depth, PREVIEW_ANGLE_DIVISOR)),
        )
    }
}

/// Releases the trigger claim when a batch action ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The drawing slots of one window and the actions that fill them.
///
/// A primary slot is driven by user inputs; the preview slots always use
/// fixed parameters. Only one action runs at a time; a trigger arriving
/// while another is running is rejected.
pub struct Workbench {
    orchestrator: Orchestrator,
    primary: FractalSession,
    previews: Vec<Preview>,
    inputs: Mutex<Option<FractalParameters>>,
    in_flight: AtomicBool,
}

impl Workbench {
    pub fn new(config: WorkbenchConfig, presenter_port: Arc<dyn PresenterPort>) -> io::Result<Self> {
        let update_context = Arc::new(UpdateContext::new()?);
        let orchestrator = Orchestrator::new(update_context, presenter_port);
        let session_config = SessionConfig::for_curve(config.curve);

        let primary = orchestrator.add_session(session_config);
        let previews = PREVIEW_DEPTHS
            .iter()
            .map(|&depth| Preview {
                depth,
                session: orchestrator.add_session(session_config),
            })
            .collect();

        Ok(Self {
            orchestrator,
            primary,
            previews,
            inputs: Mutex::new(FractalParameters::from_inputs(
                config.iterations,
                config.angle_divisor,
            )),
            in_flight: AtomicBool::new(false),
        })
    }

    /// Replaces the user inputs used by the primary slot.
    pub fn set_inputs(&self, iterations: Option<i64>, angle_divisor: Option<i64>) {
        *self.inputs.lock().unwrap_or_else(PoisonError::into_inner) =
            FractalParameters::from_inputs(iterations, angle_divisor);
    }

    #[must_use]
    pub fn inputs(&self) -> Option<FractalParameters> {
        *self.inputs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `action` to completion, unless another action is still running.
    pub fn trigger(&self, action: BatchAction) -> Result<(), TriggerError> {
        let _claim = self.claim(action)?;

        info!(%action, "action triggered");

        match action {
            BatchAction::RunSequentialPair => {
                let mut specs = vec![self.primary_task()];
                specs.extend(
                    self.previews
                        .iter()
                        .filter(|preview| preview.depth == PAIR_PREVIEW_DEPTH)
                        .map(Preview::task),
                );

                self.orchestrator.run_sequential_group(&specs);
            }
            BatchAction::RunParallelSet => {
                let mut specs = vec![self.primary_task()];
                specs.extend(self.previews.iter().map(Preview::task));

                self.orchestrator.run_batch(&specs);
            }
            BatchAction::Clear => {
                self.orchestrator.clear_all(&self.orchestrator.sessions());
            }
        }

        Ok(())
    }

    /// True while an action is running; a user interface disables its
    /// controls and shows progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) || self.orchestrator.is_busy()
    }

    #[must_use]
    pub fn primary(&self) -> &FractalSession {
        &self.primary
    }

    /// Preview slots with their fixed depths, deepest first.
    pub fn previews(&self) -> impl Iterator<Item = (i64, &FractalSession)> {
        self.previews
            .iter()
            .map(|preview| (preview.depth, &preview.session))
    }

    #[must_use]
    pub fn preview(&self, depth: i64) -> Option<&FractalSession> {
        self.previews
            .iter()
            .find(|preview| preview.depth == depth)
            .map(|preview| &preview.session)
    }

    #[must_use]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    fn primary_task(&self) -> TaskSpec {
        TaskSpec::new(&self.primary, self.inputs())
    }

    fn claim(&self, action: BatchAction) -> Result<InFlight<'_>, TriggerError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(%action, "rejected while busy");
            return Err(TriggerError::Busy { action });
        }

        let claim = InFlight(&self.in_flight);

        if self.orchestrator.is_busy() {
            warn!(%action, "rejected while busy");
            return Err(TriggerError::Busy { action });
        }

        Ok(claim)
    }
}

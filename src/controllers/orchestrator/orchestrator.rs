use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::controllers::events::update_event::UpdateEvent;
use crate::controllers::orchestrator::task_spec::TaskSpec;
use crate::controllers::ports::presenter_port::PresenterPort;
use crate::controllers::session::session::FractalSession;
use crate::controllers::session::session_config::SessionConfig;
use crate::controllers::session::update_context::UpdateContext;

/// Runs groups of session computations as batches.
///
/// Around every batch the orchestrator clears and then restores its
/// `enabled` flag, so an external caller can tell whether a batch is in
/// flight. The flag is only written on the update context. The orchestrator
/// does not reject overlapping batches itself; while batches overlap the flag
/// stays cleared until the last of them finishes.
pub struct Orchestrator {
    update_context: Arc<UpdateContext>,
    presenter_port: Arc<dyn PresenterPort>,
    enabled: Arc<AtomicBool>,
    running: Arc<AtomicUsize>,
    sessions: Mutex<Vec<FractalSession>>,
}

impl Orchestrator {
    pub fn new(
        update_context: Arc<UpdateContext>,
        presenter_port: Arc<dyn PresenterPort>,
    ) -> Self {
        Self {
            update_context,
            presenter_port,
            enabled: Arc::new(AtomicBool::new(true)),
            running: Arc::new(AtomicUsize::new(0)),
            sessions: Mutex::new(Vec::new()),
        }
    }

    /// Creates a session on this orchestrator's update context and registers it.
    pub fn add_session(&self, config: SessionConfig) -> FractalSession {
        let session = FractalSession::new(
            config,
            Arc::clone(&self.update_context),
            Arc::clone(&self.presenter_port),
        );

        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(session.clone());

        debug!(session = %session.id(), curve = config.curve().display_name(), "session added");

        session
    }

    #[must_use]
    pub fn sessions(&self) -> Vec<FractalSession> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.is_enabled()
    }

    /// Runs every task concurrently and returns once all of them are applied.
    pub fn run_batch(&self, specs: &[TaskSpec]) {
        let groups: Vec<&[TaskSpec]> = specs.chunks(1).collect();

        self.run_groups("batch", specs, &groups);
    }

    /// Runs the tasks one after another in a single unit of work.
    pub fn run_sequential_group(&self, specs: &[TaskSpec]) {
        self.run_groups("sequential group", specs, &[specs]);
    }

    /// Erases every given session and waits until all are empty.
    pub fn clear_all(&self, sessions: &[FractalSession]) {
        let pending: Vec<_> = sessions.iter().map(FractalSession::erase).collect();

        for handle in pending {
            handle.wait();
        }

        debug!(sessions = sessions.len(), "sessions cleared");
    }

    fn run_groups(&self, label: &str, specs: &[TaskSpec], groups: &[&[TaskSpec]]) {
        let start = Instant::now();
        info!(kind = label, tasks = specs.len(), units = groups.len(), "batch started");

        self.set_enabled(false, specs);

        thread::scope(|scope| {
            for group in groups {
                scope.spawn(move || {
                    for spec in *group {
                        spec.session.compute(spec.params).wait();
                    }
                });
            }
        });

        self.set_enabled(true, specs);

        info!(kind = label, elapsed = ?start.elapsed(), "batch finished");
    }

    fn set_enabled(&self, enabled: bool, specs: &[TaskSpec]) {
        let pending: Vec<_> = specs
            .iter()
            .map(|spec| spec.session.set_enabled(enabled))
            .collect();

        let flag = Arc::clone(&self.enabled);
        let running = Arc::clone(&self.running);
        let presenter_port = Arc::clone(&self.presenter_port);

        // Only the first batch to start and the last to finish flip the flag.
        let applied = self.update_context.run(move || {
            let changed = if enabled {
                running.fetch_sub(1, Ordering::AcqRel) == 1
            } else {
                running.fetch_add(1, Ordering::AcqRel) == 0
            };

            if changed {
                flag.store(enabled, Ordering::Release);
                presenter_port.present(UpdateEvent::BatchEnabled { enabled });
            }
        });

        if applied.is_none() {
            error!(enabled, "batch enablement was not confirmed by the update context");
        }

        for handle in pending {
            handle.wait();
        }
    }
}

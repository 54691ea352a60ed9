use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, info};

use crate::controllers::events::update_event::UpdateEvent;
use crate::controllers::ports::presenter_port::PresenterPort;

/// Reports update events through `tracing` instead of redrawing a canvas.
pub struct LogPresenter {
    presented: AtomicUsize,
}

impl PresenterPort for LogPresenter {
    fn present(&self, event: UpdateEvent) {
        self.presented.fetch_add(1, Ordering::Relaxed);

        match event {
            UpdateEvent::VerticesAppended {
                session,
                appended,
                total,
                elapsed,
            } => {
                info!(
                    %session,
                    appended,
                    total,
                    elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                    "vertices appended"
                );
            }
            UpdateEvent::VerticesErased { session } => {
                debug!(%session, "vertices erased");
            }
            UpdateEvent::SessionEnabled { session, enabled } => {
                debug!(%session, enabled, "session enablement changed");
            }
            UpdateEvent::BatchEnabled { enabled } => {
                debug!(enabled, "batch enablement changed");
            }
        }
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPresenter {
    pub fn new() -> Self {
        Self {
            presented: AtomicUsize::new(0),
        }
    }

    /// Number of events presented so far.
    #[must_use]
    pub fn presented(&self) -> usize {
        self.presented.load(Ordering::Relaxed)
    }
}

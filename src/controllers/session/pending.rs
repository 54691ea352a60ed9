use std::sync::mpsc::Receiver;

use tracing::error;

/// Completion handle for a session operation.
///
/// The operation has been issued (and ordered) when the handle is returned;
/// [`Pending::wait`] suspends the caller until its effect has been applied.
#[must_use = "a session operation is only known to be applied after `wait`"]
#[derive(Debug)]
pub struct Pending {
    done: Receiver<()>,
}

impl Pending {
    pub(crate) fn new(done: Receiver<()>) -> Self {
        Self { done }
    }

    pub fn wait(self) {
        if self.done.recv().is_err() {
            error!("session operation was dropped before it was applied");
        }
    }
}

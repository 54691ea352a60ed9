use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle, ThreadId};

use tracing::{debug, error};

type Job = Box<dyn FnOnce() + Send + 'static>;

const THREAD_NAME: &str = "fractal-update";

/// The single thread on which session buffers and enablement flags change.
///
/// Jobs run one at a time in the order they were posted. Observers notified
/// from a job therefore never see two updates interleave.
pub struct UpdateContext {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
    worker_id: ThreadId,
}

impl UpdateContext {
    pub fn new() -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<Job>();

        let worker = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || Self::worker_loop(receiver))?;
        let worker_id = worker.thread().id();

        debug!(thread = THREAD_NAME, "update context started");

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
            worker_id,
        })
    }

    /// Queues `job` to run on the update thread and returns immediately.
    pub fn post(&self, job: impl FnOnce() + Send + 'static) {
        let Some(sender) = &self.sender else {
            error!("update context already shut down, dropping job");
            return;
        };

        if sender.send(Box::new(job)).is_err() {
            error!("update thread has terminated, dropping job");
        }
    }

    /// Runs `job` on the update thread and blocks until it has finished.
    ///
    /// Returns `None` if the update thread is gone or `job` panicked. Must
    /// not be called from the update thread itself.
    pub fn run<R: Send + 'static>(&self, job: impl FnOnce() -> R + Send + 'static) -> Option<R> {
        debug_assert!(!self.is_current(), "UpdateContext::run would deadlock");

        let (reply, result) = mpsc::channel();

        self.post(move || {
            let _ = reply.send(job());
        });

        result.recv().ok()
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.worker_id
    }

    pub fn shutdown(&mut self) {
        // Closing the channel lets the loop drain what is queued and exit.
        self.sender.take();

        if self.is_current() {
            return;
        }

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("update thread panicked");
            }
        }
    }

    fn worker_loop(receiver: Receiver<Job>) {
        while let Ok(job) = receiver.recv() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(job)) {
                error!(
                    thread = THREAD_NAME,
                    panic = panic_message(payload.as_ref()),
                    "update job panicked"
                );
            }
        }

        debug!(thread = THREAD_NAME, "update context stopped");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

impl Drop for UpdateContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}

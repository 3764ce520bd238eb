//! UI-thread dispatch
//!
//! Only the UI thread may touch on-screen widgets, so the presenter never calls
//! [`DisplayService::show`](crate::display::DisplayService::show) directly. It
//! hands the call to a [`Dispatcher`], which decides where it runs.

use std::fmt;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{ToastError, ToastResult};

/// Unit of work destined for the UI thread
pub type Job = Box<dyn FnOnce() + Send>;

/// Runs jobs on the thread that owns the display
pub trait Dispatcher: Send + Sync {
    /// Hand `job` over for execution.
    ///
    /// Fails when the job can never run; the job has been dropped by then.
    fn dispatch(&self, job: Job) -> ToastResult<()>;
}

/// Runs every job immediately on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    fn dispatch(&self, job: Job) -> ToastResult<()> {
        job();
        Ok(())
    }
}

/// Sends jobs to a [`UiQueue`] drained by the UI thread or task
#[derive(Clone)]
pub struct QueueDispatcher {
    job_tx: mpsc::UnboundedSender<Job>,
}

impl QueueDispatcher {
    /// Create a dispatcher and the queue that executes its jobs
    pub fn new() -> (Self, UiQueue) {
        let (job_tx, job_rx) = mpsc::unbounded_channel();
        (Self { job_tx }, UiQueue { job_rx })
    }
}

impl Dispatcher for QueueDispatcher {
    fn dispatch(&self, job: Job) -> ToastResult<()> {
        self.job_tx
            .send(job)
            .map_err(|_| ToastError::DispatcherClosed)
    }
}

impl fmt::Debug for QueueDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueDispatcher")
            .field("closed", &self.job_tx.is_closed())
            .finish()
    }
}

/// Receiving end of a [`QueueDispatcher`]
pub struct UiQueue {
    job_rx: mpsc::UnboundedReceiver<Job>,
}

impl UiQueue {
    /// Run jobs as they arrive until every dispatcher has been dropped
    pub async fn run(mut self) {
        while let Some(job) = self.job_rx.recv().await {
            job();
        }
        debug!("UI queue closed");
    }

    /// Run every job queued so far without waiting; returns how many ran
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.job_rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }
}

impl fmt::Debug for UiQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiQueue").finish_non_exhaustive()
    }
}

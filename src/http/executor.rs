//! Upload executor.
//!
//! # Responsibilities
//! - Serialize upload-body writes through one dedicated worker
//! - Accept jobs from any thread without blocking the caller
//!
//! # Design Decisions
//! - One worker thread fed by an unbounded channel; submission order is
//!   execution order
//! - The worker blocks on the channel directly so no async runtime is
//!   required at translation time
//! - Jobs submitted after shutdown are dropped with a warning, not a panic

use std::thread;

use tokio::sync::mpsc;

type Job = Box<dyn FnOnce() + Send>;

/// Executes engine transfer work. The engine calls into this for upload
/// writes; implementations decide where those run.
pub trait TransferExecutor: Send + Sync {
    fn execute(&self, job: Job);
}

/// Default executor: a single named worker thread draining a job queue.
pub struct SerialExecutor {
    tx: Option<mpsc::UnboundedSender<Job>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl SerialExecutor {
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
        let spawned = thread::Builder::new()
            .name("envoy-upload".to_string())
            .spawn(move || {
                while let Some(job) = rx.blocking_recv() {
                    job();
                }
            });
        match spawned {
            Ok(worker) => Self {
                tx: Some(tx),
                worker: Some(worker),
            },
            Err(err) => {
                tracing::error!(error = %err, "failed to spawn upload worker thread");
                Self {
                    tx: None,
                    worker: None,
                }
            }
        }
    }
}

impl Default for SerialExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferExecutor for SerialExecutor {
    fn execute(&self, job: Job) {
        let delivered = self
            .tx
            .as_ref()
            .map(|tx| tx.send(job).is_ok())
            .unwrap_or(false);
        if !delivered {
            tracing::warn!("upload worker gone, dropping job");
        }
    }
}

impl Drop for SerialExecutor {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain queued jobs and exit.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

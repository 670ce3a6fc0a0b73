use std::sync::Arc;
use std::thread;

use futures::executor::ThreadPool;
use futures::future;
use parking_lot::Mutex;

use super::{Scheduler, Task};

/// Parallel-bounded scheduler: a fixed pool sized to the number of available
/// execution units, suitable for CPU-bound transformation work.
#[derive(Clone)]
pub struct ComputationScheduler {
  pool: Arc<Mutex<Option<ThreadPool>>>,
}

impl ComputationScheduler {
  /// A pool with one worker per available execution unit.
  pub fn new() -> Self {
    let parallelism = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    Self::with_pool_size(parallelism)
  }

  /// A pool with exactly `size` workers.
  pub fn with_pool_size(size: usize) -> Self {
    let pool = ThreadPool::builder()
      .pool_size(size.max(1))
      .name_prefix("rx-computation-")
      .create()
      .expect("failed to start computation pool");
    tracing::debug!(size, "computation pool started");
    Self { pool: Arc::new(Mutex::new(Some(pool))) }
  }

  /// Stop accepting work. Workers finish the units already queued and then
  /// exit; subsequent `execute` calls drop their task.
  pub fn shutdown(&self) {
    if self.pool.lock().take().is_some() {
      tracing::debug!("computation pool shut down");
    }
  }
}

impl Default for ComputationScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for ComputationScheduler {
  fn execute(&self, task: Task) {
    match &*self.pool.lock() {
      Some(pool) => pool.spawn_ok(future::lazy(move |_| task())),
      None => tracing::warn!("task dropped: computation scheduler is shut down"),
    }
  }
}

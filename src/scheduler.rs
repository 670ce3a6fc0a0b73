//! Schedulers: fire-and-forget submission onto worker pools.
//!
//! A [`Scheduler`] only knows how to accept a unit of work and run it on some
//! worker thread at an unspecified future time, possibly concurrently with
//! other units. There is no handle, no future and no completion signal.
//! Suspension is realized only by a worker thread blocking; nothing here is
//! async.
//!
//! Three strategies are provided, differing only in pool shape:
//!
//! - [`ComputationScheduler`] — bounded pool sized to the number of available
//!   execution units, for CPU-bound work.
//! - [`IoScheduler`] — unbounded pool that grows on demand and reclaims idle
//!   workers, for blocking I/O-style work.
//! - [`SingleThreadScheduler`] — one worker, strict submission order.
//!
//! Unlike the classic Rx pools, every scheduler here has an explicit scoped
//! lifecycle: `shutdown` stops intake and reclaims workers. The process-wide
//! defaults returned by [`computation`], [`io`] and [`single`] are never shut
//! down and live for the life of the process.

use std::sync::Arc;

use once_cell::sync::Lazy;

mod computation;
mod io;
mod single;

pub use computation::ComputationScheduler;
pub use io::IoScheduler;
pub use single::SingleThreadScheduler;

/// A unit of work submitted to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// An execution context offering only fire-and-forget submission.
pub trait Scheduler: Send + Sync {
  /// Submit a unit of work and return immediately. The unit runs on some
  /// worker thread later; after `shutdown` it is dropped instead.
  fn execute(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
  fn execute(&self, task: Task) { (**self).execute(task); }
}

static COMPUTATION: Lazy<ComputationScheduler> = Lazy::new(ComputationScheduler::new);
static IO: Lazy<IoScheduler> = Lazy::new(IoScheduler::new);
static SINGLE: Lazy<SingleThreadScheduler> = Lazy::new(SingleThreadScheduler::new);

/// The process-wide bounded pool for CPU-bound work.
pub fn computation() -> ComputationScheduler { COMPUTATION.clone() }

/// The process-wide growable pool for blocking I/O-style work.
pub fn io() -> IoScheduler { IO.clone() }

/// The process-wide serial worker.
pub fn single() -> SingleThreadScheduler { SINGLE.clone() }

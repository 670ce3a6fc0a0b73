use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Sender};
use parking_lot::Mutex;

use super::{Scheduler, Task};

/// Serial scheduler: exactly one worker draining a FIFO queue, so units
/// execute strictly one at a time in submission order. This is the only
/// strategy with an ordering guarantee.
#[derive(Clone)]
pub struct SingleThreadScheduler(Arc<Inner>);

struct Inner {
  sender: Mutex<Option<Sender<Task>>>,
  handle: Mutex<Option<JoinHandle<()>>>,
}

impl SingleThreadScheduler {
  pub fn new() -> Self {
    let (sender, receiver) = unbounded::<Task>();
    let handle = thread::Builder::new()
      .name("rx-single".into())
      .spawn(move || {
        // Runs until the sender side is dropped, draining what is queued.
        while let Ok(task) = receiver.recv() {
          task();
        }
        tracing::debug!("single worker retired");
      })
      .expect("failed to spawn single worker");
    Self(Arc::new(Inner {
      sender: Mutex::new(Some(sender)),
      handle: Mutex::new(Some(handle)),
    }))
  }

  /// Stop accepting work, let the worker drain the queue and join it.
  /// Subsequent `execute` calls drop their task.
  pub fn shutdown(&self) {
    if self.0.sender.lock().take().is_none() {
      return;
    }
    if let Some(handle) = self.0.handle.lock().take() {
      let _ = handle.join();
    }
    tracing::debug!("single scheduler shut down");
  }
}

impl Default for SingleThreadScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for SingleThreadScheduler {
  fn execute(&self, task: Task) {
    match &*self.0.sender.lock() {
      Some(sender) => {
        let _ = sender.send(task);
      }
      None => tracing::warn!("task dropped: single scheduler is shut down"),
    }
  }
}

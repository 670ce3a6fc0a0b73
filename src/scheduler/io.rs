use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;

use super::{Scheduler, Task};

const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(60);

/// Parallel-unbounded scheduler: a cached pool that spawns a worker whenever
/// no idle one is available and retires workers that stay idle past the
/// keep-alive. Suitable for blocking I/O-style work where many units may
/// block concurrently.
#[derive(Clone)]
pub struct IoScheduler(Arc<Inner>);

struct Inner {
  sender: Mutex<Option<Sender<Task>>>,
  receiver: Receiver<Task>,
  idle: Arc<AtomicUsize>,
  spawned: AtomicUsize,
  handles: Mutex<Vec<JoinHandle<()>>>,
  keep_alive: Duration,
}

impl IoScheduler {
  pub fn new() -> Self { Self::with_keep_alive(DEFAULT_KEEP_ALIVE) }

  /// A pool whose idle workers retire after `keep_alive` without work.
  pub fn with_keep_alive(keep_alive: Duration) -> Self {
    let (sender, receiver) = unbounded();
    Self(Arc::new(Inner {
      sender: Mutex::new(Some(sender)),
      receiver,
      idle: Arc::new(AtomicUsize::new(0)),
      spawned: AtomicUsize::new(0),
      handles: Mutex::new(Vec::new()),
      keep_alive,
    }))
  }

  /// Stop accepting work, let workers drain the queue and join them.
  /// Subsequent `execute` calls drop their task.
  pub fn shutdown(&self) {
    if self.0.sender.lock().take().is_none() {
      return;
    }
    for handle in self.0.handles.lock().drain(..) {
      let _ = handle.join();
    }
    tracing::debug!("io pool shut down");
  }

  fn spawn_worker(&self) {
    let receiver = self.0.receiver.clone();
    let idle = self.0.idle.clone();
    let keep_alive = self.0.keep_alive;
    let id = self.0.spawned.fetch_add(1, Ordering::Relaxed);
    let handle = thread::Builder::new()
      .name(format!("rx-io-{id}"))
      .spawn(move || {
        tracing::debug!(id, "io worker started");
        idle.fetch_add(1, Ordering::Release);
        loop {
          match receiver.recv_timeout(keep_alive) {
            Ok(task) => {
              idle.fetch_sub(1, Ordering::Release);
              task();
              idle.fetch_add(1, Ordering::Release);
            }
            // Idle past the keep-alive, or the pool shut down and the
            // queue is drained: retire.
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
          }
        }
        idle.fetch_sub(1, Ordering::Release);
        tracing::debug!(id, "io worker retired");
      })
      .expect("failed to spawn io worker");
    self.0.handles.lock().push(handle);
  }
}

impl Default for IoScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for IoScheduler {
  fn execute(&self, task: Task) {
    let sender = self.0.sender.lock();
    match &*sender {
      Some(sender) => {
        if self.0.idle.load(Ordering::Acquire) == 0 {
          self.spawn_worker();
        }
        let _ = sender.send(task);
      }
      None => tracing::warn!("task dropped: io scheduler is shut down"),
    }
  }
}

#[cfg(test)]
mod test {
  use std::sync::mpsc;
  use std::time::Instant;

  use super::*;

  #[test]
  fn grows_to_run_blocking_units_concurrently() {
    let scheduler = IoScheduler::new();
    let (tx, rx) = mpsc::channel();
    let units = 8;
    for _ in 0..units {
      let tx = tx.clone();
      scheduler.execute(Box::new(move || {
        thread::sleep(Duration::from_millis(100));
        tx.send(()).unwrap();
      }));
    }
    let start = Instant::now();
    for _ in 0..units {
      rx.recv_timeout(Duration::from_secs(2)).unwrap();
    }
    // Eight 100ms blocking units must overlap heavily; anything close to
    // 800ms would mean the pool failed to grow.
    assert!(start.elapsed() < Duration::from_millis(500));
    scheduler.shutdown();
  }

  #[test]
  fn reuses_an_idle_worker() {
    let scheduler = IoScheduler::new();
    let (tx, rx) = mpsc::channel();
    let tx2 = tx.clone();
    scheduler.execute(Box::new(move || tx.send(thread::current().id()).unwrap()));
    let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    // Give the worker time to go back to waiting.
    thread::sleep(Duration::from_millis(20));
    scheduler.execute(Box::new(move || tx2.send(thread::current().id()).unwrap()));
    let second = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(first, second);
    scheduler.shutdown();
  }

  #[test]
  fn idle_workers_retire_after_keep_alive() {
    let scheduler = IoScheduler::with_keep_alive(Duration::from_millis(30));
    let (tx, rx) = mpsc::channel();
    scheduler.execute(Box::new(move || tx.send(()).unwrap()));
    rx.recv_timeout(Duration::from_secs(2)).unwrap();

    thread::sleep(Duration::from_millis(150));
    assert_eq!(scheduler.0.idle.load(Ordering::Acquire), 0);
    scheduler.shutdown();
  }

  #[test]
  fn shutdown_drains_queued_tasks_then_drops_new_ones() {
    let scheduler = IoScheduler::new();
    let (tx, rx) = mpsc::channel();
    let tx2 = tx.clone();
    scheduler.execute(Box::new(move || {
      thread::sleep(Duration::from_millis(30));
      tx.send("queued").unwrap();
    }));
    // shutdown joins the worker, so the queued unit has already run.
    scheduler.shutdown();
    assert_eq!(rx.try_recv().unwrap(), "queued");

    scheduler.execute(Box::new(move || tx2.send("late").unwrap()));
    thread::sleep(Duration::from_millis(50));
    assert!(rx.try_recv().is_err());
  }
}

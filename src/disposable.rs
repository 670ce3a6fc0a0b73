//! Cooperative cancellation handle
//!
//! A [`Disposable`] is created fresh for every `subscribe` call and shared
//! with the per-subscription proxy. Disposing only stops further *delivery*;
//! it never interrupts a running subscription procedure, a blocked scheduler
//! worker or pending scheduler units.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A per-subscription cancellation flag.
///
/// Clones share the same flag. `is_disposed` is safe to call from any thread
/// and reflects the most recent `dispose` call; the flag is the only state a
/// subscription shares across threads.
#[derive(Clone, Debug, Default)]
pub struct Disposable {
  disposed: Arc<AtomicBool>,
}

impl Disposable {
  pub fn new() -> Self { Self::default() }

  /// Stop further event delivery for this subscription.
  ///
  /// Sources that loop must poll
  /// [`Subscriber::is_disposed`](crate::subscriber::Subscriber::is_disposed)
  /// to actually stop producing.
  pub fn dispose(&self) { self.disposed.store(true, Ordering::Release); }

  pub fn is_disposed(&self) -> bool { self.disposed.load(Ordering::Acquire) }
}

//! Per-subscription observer proxy
//!
//! Every `subscribe` call wraps the terminal observer in a [`Subscriber`]
//! that checks the disposed flag immediately before forwarding each event.
//! Once disposed, the proxy silently drops everything. There is no
//! "already terminated" tracking: a source that emits after a terminal event
//! still reaches the observer as long as the flag is unset.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::disposable::Disposable;
use crate::observer::Observer;

/// Cloneable handle to the terminal observer of one subscription.
///
/// Subscription procedures receive a `Subscriber` and may move it into other
/// threads or keep clones; all clones forward to the same observer and share
/// the same disposed flag.
pub struct Subscriber<Item, Err> {
  observer: Arc<Mutex<Box<dyn Observer<Item, Err> + Send>>>,
  disposable: Disposable,
}

impl<Item, Err> Clone for Subscriber<Item, Err> {
  fn clone(&self) -> Self {
    Self { observer: self.observer.clone(), disposable: self.disposable.clone() }
  }
}

impl<Item, Err> Subscriber<Item, Err> {
  pub(crate) fn new(
    observer: impl Observer<Item, Err> + Send + 'static,
    disposable: Disposable,
  ) -> Self {
    Self { observer: Arc::new(Mutex::new(Box::new(observer))), disposable }
  }

  /// The cooperative cancellation token of this subscription. Looping
  /// procedures must poll this to stop producing; nothing interrupts them.
  pub fn is_disposed(&self) -> bool { self.disposable.is_disposed() }
}

impl<Item, Err> Observer<Item, Err> for Subscriber<Item, Err> {
  fn on_next(&mut self, value: Item) {
    if !self.disposable.is_disposed() {
      self.observer.lock().on_next(value);
    }
  }

  fn on_error(&mut self, err: Err) {
    if !self.disposable.is_disposed() {
      self.observer.lock().on_error(err);
    }
  }

  fn on_complete(&mut self) {
    if !self.disposable.is_disposed() {
      self.observer.lock().on_complete();
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::test_support::{Event, Recorder};

  #[test]
  fn forwards_while_not_disposed() {
    let recorder = Recorder::default();
    let disposable = Disposable::new();
    let mut subscriber = Subscriber::new(recorder.clone(), disposable.clone());

    subscriber.on_next(1);
    subscriber.on_next(2);
    disposable.dispose();
    subscriber.on_next(3);
    subscriber.on_error("late");
    subscriber.on_complete();

    assert_eq!(recorder.events(), vec![Event::Next(1), Event::Next(2)]);
  }

  #[test]
  fn no_terminal_tracking() {
    // Completion does not set the flag, so a later error still goes through.
    let recorder = Recorder::default();
    let mut subscriber = Subscriber::new(recorder.clone(), Disposable::new());

    subscriber.on_complete();
    subscriber.on_error("spurious");

    assert_eq!(
      recorder.events(),
      vec![Event::<i32, _>::Complete, Event::Error("spurious")]
    );
  }

  #[test]
  fn clones_share_observer_and_flag() {
    let recorder = Recorder::default();
    let disposable = Disposable::new();
    let mut subscriber = Subscriber::new(recorder.clone(), disposable.clone());
    let mut clone = subscriber.clone();

    subscriber.on_next(1);
    clone.on_next(2);
    disposable.dispose();
    clone.on_next(3);

    assert_eq!(
      recorder.events(),
      vec![Event::<_, ()>::Next(1), Event::Next(2)]
    );
  }
}

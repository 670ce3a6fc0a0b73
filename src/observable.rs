//! The cold observable core: `create` and the subscribe family.

use std::fmt::Debug;
use std::sync::Arc;

use crate::disposable::Disposable;
use crate::observer::{Observer, ObserverAll, ObserverNext};
use crate::subscriber::Subscriber;

type Source<Item, Err> = dyn Fn(Subscriber<Item, Err>) -> Result<(), Err> + Send + Sync;

/// A cold, per-subscriber definition of how to produce a sequence of events.
///
/// An `Observable` owns a single *subscription procedure*: a function that is
/// handed a [`Subscriber`] and performs side-effecting emissions on it.
/// Nothing runs until `subscribe` is called, and every `subscribe` call
/// re-invokes the procedure independently — no emission is cached or shared
/// between subscribers, so two subscribers run the producing logic twice,
/// potentially concurrently.
///
/// The procedure signals failure by returning `Err`; see
/// [`subscribe_observer`](Observable::subscribe_observer) for how that is
/// routed.
pub struct Observable<Item, Err> {
  source: Arc<Source<Item, Err>>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  fn clone(&self) -> Self { Self { source: self.source.clone() } }
}

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Create an observable from a subscription procedure.
  ///
  /// The procedure is stored unevaluated. It receives a fresh [`Subscriber`]
  /// per subscription and may move it (or clones of it) into other threads.
  ///
  /// ```rust
  /// use rxcore::prelude::*;
  ///
  /// let numbers = Observable::<i32, ()>::create(|mut out| {
  ///   for i in 1..=3 {
  ///     out.on_next(i);
  ///   }
  ///   out.on_complete();
  ///   Ok(())
  /// });
  /// ```
  pub fn create(
    source: impl Fn(Subscriber<Item, Err>) -> Result<(), Err> + Send + Sync + 'static,
  ) -> Self {
    Self { source: Arc::new(source) }
  }

  /// Subscribe with a full observer, returning the subscription's
  /// [`Disposable`].
  ///
  /// This runs the subscription procedure synchronously on the calling
  /// thread (use [`subscribe_on`](Observable::subscribe_on) to move it). The
  /// observer is wrapped in a proxy that checks the disposed flag before
  /// forwarding each event. If the procedure returns `Err`, that failure is
  /// delivered as one `on_error` through the same proxy — gated only by the
  /// flag, not by any terminal-state tracking, so events the procedure
  /// already delivered are not retracted and a trailing error after
  /// `on_complete` still goes through.
  pub fn subscribe_observer(
    &self,
    observer: impl Observer<Item, Err> + Send + 'static,
  ) -> Disposable {
    let disposable = Disposable::new();
    let mut subscriber = Subscriber::new(observer, disposable.clone());
    if let Err(err) = (self.source)(subscriber.clone()) {
      subscriber.on_error(err);
    }
    disposable
  }

  /// Subscribe with a value callback only.
  ///
  /// Errors are logged at debug level and dropped; completion is ignored.
  pub fn subscribe(&self, next: impl FnMut(Item) + Send + 'static) -> Disposable
  where
    Err: Debug,
  {
    self.subscribe_observer(ObserverNext::new(next))
  }

  /// Subscribe with one callable per event kind.
  pub fn subscribe_all<N, E, C>(&self, next: N, error: E, complete: C) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.subscribe_observer(ObserverAll::new(next, error, complete))
  }
}

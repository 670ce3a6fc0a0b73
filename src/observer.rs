//! Observer trait and adapters
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: on_next (for values), on_error (for errors) and
//! on_complete (for stream completion).

use std::fmt::Debug;

/// The three-message sink capability of a subscription.
///
/// The contract is that a well-behaved source emits at most one terminal
/// event (`on_error` or `on_complete`) and no `on_next` after it, but the
/// runtime does not enforce this. All three methods therefore take
/// `&mut self`: a misbehaving source can still reach an observer after a
/// terminal call, and implementations must not assume otherwise.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable.
  fn on_next(&mut self, value: Item);

  /// Receive an error. Intended to be terminal, but not enforced.
  fn on_error(&mut self, err: Err);

  /// Receive the completion notification. Intended to be terminal, but not
  /// enforced.
  fn on_complete(&mut self);
}

/// Observer built from three callables, one per event kind.
///
/// Backs [`Observable::subscribe_all`](crate::observable::Observable::subscribe_all).
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self { Self { next, error, complete } }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Err),
  C: FnMut(),
{
  fn on_next(&mut self, value: Item) { (self.next)(value); }

  fn on_error(&mut self, err: Err) { (self.error)(err); }

  fn on_complete(&mut self) { (self.complete)(); }
}

/// Observer built from a single value callable.
///
/// Errors are logged and dropped, completion is ignored. Backs
/// [`Observable::subscribe`](crate::observable::Observable::subscribe).
pub struct ObserverNext<N> {
  next: N,
}

impl<N> ObserverNext<N> {
  pub fn new(next: N) -> Self { Self { next } }
}

impl<Item, Err, N> Observer<Item, Err> for ObserverNext<N>
where
  N: FnMut(Item),
  Err: Debug,
{
  fn on_next(&mut self, value: Item) { (self.next)(value); }

  fn on_error(&mut self, err: Err) {
    tracing::debug!(?err, "unhandled observable error dropped by next-only subscriber");
  }

  fn on_complete(&mut self) {}
}

use std::sync::Arc;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Maps each upstream value to an inner observable and merges their
  /// emissions into one stream.
  ///
  /// Each inner observable is subscribed immediately when its outer value
  /// arrives, with a completion handler that does nothing: completion of the
  /// resulting observable is tied to the **outer** source only. There is no
  /// tracking of outstanding inner subscriptions and no merge-completion
  /// barrier, so inner values that arrive after the outer `on_complete` has
  /// fired are still delivered to the same downstream observer (its disposed
  /// flag is not set by completion). Inner errors are forwarded to the
  /// downstream `on_error`; a failing mapper is delivered the same way.
  pub fn flat_map<R, F>(&self, f: F) -> Observable<R, Err>
  where
    R: Send + 'static,
    F: Fn(Item) -> Result<Observable<R, Err>, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let f = Arc::new(f);
    Observable::create(move |out| {
      source.subscribe_observer(FlatMapObserver { downstream: out, map: f.clone() });
      Ok(())
    })
  }
}

struct FlatMapObserver<R, Err, F> {
  downstream: Subscriber<R, Err>,
  map: Arc<F>,
}

impl<Item, R, Err, F> Observer<Item, Err> for FlatMapObserver<R, Err, F>
where
  R: Send + 'static,
  Err: Send + 'static,
  F: Fn(Item) -> Result<Observable<R, Err>, Err> + Send + Sync + 'static,
{
  fn on_next(&mut self, value: Item) {
    match (self.map)(value) {
      Ok(inner) => {
        // The inner disposable is discarded: disposing the outer
        // subscription gates delivery at the terminal proxy instead.
        inner.subscribe_observer(InnerObserver { downstream: self.downstream.clone() });
      }
      Err(err) => self.downstream.on_error(err),
    }
  }

  fn on_error(&mut self, err: Err) { self.downstream.on_error(err); }

  // Outer completion is the only completion that matters.
  fn on_complete(&mut self) { self.downstream.on_complete(); }
}

struct InnerObserver<R, Err> {
  downstream: Subscriber<R, Err>,
}

impl<R, Err> Observer<R, Err> for InnerObserver<R, Err>
where
  R: Send + 'static,
  Err: Send + 'static,
{
  fn on_next(&mut self, value: R) { self.downstream.on_next(value); }

  fn on_error(&mut self, err: Err) { self.downstream.on_error(err); }

  // Inner completion is deliberately ignored.
  fn on_complete(&mut self) {}
}

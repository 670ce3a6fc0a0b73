use std::sync::Arc;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Creates a new observable which calls a closure on each upstream value
  /// and emits its result.
  ///
  /// The closure is fallible: an `Err` is delivered downstream as one
  /// `on_error` for the failing item. That does not terminate the
  /// subscription by itself — whether later events still reach the observer
  /// is decided solely by the terminal proxy's disposed flag, so upstream
  /// items after a mapping failure are mapped and forwarded as usual.
  /// Upstream errors and completion pass through unchanged.
  pub fn map<R, F>(&self, f: F) -> Observable<R, Err>
  where
    R: Send + 'static,
    F: Fn(Item) -> Result<R, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let f = Arc::new(f);
    Observable::create(move |out| {
      source.subscribe_observer(MapObserver { downstream: out, map: f.clone() });
      Ok(())
    })
  }
}

struct MapObserver<R, Err, F> {
  downstream: Subscriber<R, Err>,
  map: Arc<F>,
}

impl<Item, R, Err, F> Observer<Item, Err> for MapObserver<R, Err, F>
where
  R: Send + 'static,
  Err: Send + 'static,
  F: Fn(Item) -> Result<R, Err> + Send + Sync,
{
  fn on_next(&mut self, value: Item) {
    match (self.map)(value) {
      Ok(mapped) => self.downstream.on_next(mapped),
      Err(err) => self.downstream.on_error(err),
    }
  }

  fn on_error(&mut self, err: Err) { self.downstream.on_error(err); }

  fn on_complete(&mut self) { self.downstream.on_complete(); }
}

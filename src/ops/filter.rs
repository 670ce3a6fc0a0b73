use std::sync::Arc;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Creates a new observable which emits only the upstream values the
  /// predicate accepts; dropped items produce no callback at all.
  ///
  /// Predicate failure is delivered as one `on_error`, in the same manner as
  /// [`map`](Observable::map): later upstream items keep flowing unless the
  /// subscription is disposed. Relative order of surviving items is
  /// preserved.
  pub fn filter<P>(&self, predicate: P) -> Observable<Item, Err>
  where
    P: Fn(&Item) -> Result<bool, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let predicate = Arc::new(predicate);
    Observable::create(move |out| {
      source.subscribe_observer(FilterObserver {
        downstream: out,
        predicate: predicate.clone(),
      });
      Ok(())
    })
  }
}

struct FilterObserver<Item, Err, P> {
  downstream: Subscriber<Item, Err>,
  predicate: Arc<P>,
}

impl<Item, Err, P> Observer<Item, Err> for FilterObserver<Item, Err, P>
where
  Item: Send + 'static,
  Err: Send + 'static,
  P: Fn(&Item) -> Result<bool, Err> + Send + Sync,
{
  fn on_next(&mut self, value: Item) {
    match (self.predicate)(&value) {
      Ok(true) => self.downstream.on_next(value),
      Ok(false) => {}
      Err(err) => self.downstream.on_error(err),
    }
  }

  fn on_error(&mut self, err: Err) { self.downstream.on_error(err); }

  fn on_complete(&mut self) { self.downstream.on_complete(); }
}

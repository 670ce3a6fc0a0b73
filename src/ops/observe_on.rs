use std::sync::Arc;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::scheduler::Scheduler;
use crate::subscriber::Subscriber;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Relocates delivery of each individual event onto `scheduler`.
  ///
  /// Every `on_next`/`on_error`/`on_complete` is dispatched as its own
  /// independent unit of work. With a multi-worker scheduler, consecutive
  /// events of one subscription may therefore be delivered out of submission
  /// order; only [`SingleThreadScheduler`](crate::scheduler::SingleThreadScheduler)
  /// preserves emission order.
  pub fn observe_on(&self, scheduler: impl Scheduler + 'static) -> Observable<Item, Err> {
    let source = self.clone();
    let scheduler = Arc::new(scheduler);
    Observable::create(move |out| {
      source.subscribe_observer(ObserveOnObserver {
        downstream: out,
        scheduler: scheduler.clone(),
      });
      Ok(())
    })
  }
}

struct ObserveOnObserver<Item, Err, S> {
  downstream: Subscriber<Item, Err>,
  scheduler: Arc<S>,
}

impl<Item, Err, S> Observer<Item, Err> for ObserveOnObserver<Item, Err, S>
where
  Item: Send + 'static,
  Err: Send + 'static,
  S: Scheduler + 'static,
{
  fn on_next(&mut self, value: Item) {
    let mut downstream = self.downstream.clone();
    self.scheduler.execute(Box::new(move || downstream.on_next(value)));
  }

  fn on_error(&mut self, err: Err) {
    let mut downstream = self.downstream.clone();
    self.scheduler.execute(Box::new(move || downstream.on_error(err)));
  }

  fn on_complete(&mut self) {
    let mut downstream = self.downstream.clone();
    self.scheduler.execute(Box::new(move || downstream.on_complete()));
  }
}

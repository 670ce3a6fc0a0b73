use crate::observable::Observable;
use crate::scheduler::Scheduler;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Relocates invocation of the upstream subscription procedure onto a
  /// worker of `scheduler`.
  ///
  /// The `subscribe` call itself returns to the caller immediately; the
  /// upstream procedure then runs as a single unit of work, blocking a pool
  /// worker for however long it takes. Disposing the returned handle stops
  /// delivery but does not cancel the queued unit.
  pub fn subscribe_on(&self, scheduler: impl Scheduler + 'static) -> Observable<Item, Err> {
    let source = self.clone();
    Observable::create(move |out| {
      let source = source.clone();
      scheduler.execute(Box::new(move || {
        source.subscribe_observer(out);
      }));
      Ok(())
    })
  }
}

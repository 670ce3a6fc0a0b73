//! Shared test helpers: an event log observer used across unit tests.

use std::sync::{Arc, Mutex};

use crate::observer::Observer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event<T, E> {
  Next(T),
  Error(E),
  Complete,
}

/// Records every event it receives, in order. Clones share the same log.
pub(crate) struct Recorder<T, E> {
  events: Arc<Mutex<Vec<Event<T, E>>>>,
}

impl<T, E> Default for Recorder<T, E> {
  fn default() -> Self { Self { events: Arc::new(Mutex::new(Vec::new())) } }
}

impl<T, E> Clone for Recorder<T, E> {
  fn clone(&self) -> Self { Self { events: self.events.clone() } }
}

impl<T: Clone, E: Clone> Recorder<T, E> {
  pub fn events(&self) -> Vec<Event<T, E>> { self.events.lock().unwrap().clone() }

  pub fn values(&self) -> Vec<T> {
    self
      .events()
      .into_iter()
      .filter_map(|e| match e {
        Event::Next(v) => Some(v),
        _ => None,
      })
      .collect()
  }

  pub fn completions(&self) -> usize {
    self
      .events()
      .iter()
      .filter(|e| matches!(e, Event::Complete))
      .count()
  }
}

impl<T, E> Observer<T, E> for Recorder<T, E> {
  fn on_next(&mut self, value: T) { self.events.lock().unwrap().push(Event::Next(value)); }

  fn on_error(&mut self, err: E) { self.events.lock().unwrap().push(Event::Error(err)); }

  fn on_complete(&mut self) { self.events.lock().unwrap().push(Event::Complete); }
}

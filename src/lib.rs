//! # rxcore: a minimal Reactive Extensions core
//!
//! A push-based reactive stream library: cold [`Observable`] sources,
//! composable operators (`map`, `filter`, `flat_map`, `subscribe_on`,
//! `observe_on`) and thread-pool [`Scheduler`]s with cooperative cancellation
//! via [`Disposable`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rxcore::prelude::*;
//!
//! Observable::<i32, ()>::create(|mut out| {
//!   out.on_next(1);
//!   out.on_next(2);
//!   out.on_next(3);
//!   out.on_complete();
//!   Ok(())
//! })
//! .filter(|v| Ok(v % 2 == 1))
//! .map(|v| Ok(v * 10))
//! .subscribe(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A cold definition of how to produce a sequence of events |
//! | [`Observer`] | Consumes `on_next`, `on_error` and `on_complete` events |
//! | [`Disposable`] | Per-subscription handle to stop further delivery |
//! | [`Scheduler`] | Fire-and-forget submission onto a worker pool |
//!
//! An observable is *cold*: every `subscribe` call re-runs the subscription
//! procedure, so two subscribers run the producing logic twice, possibly
//! concurrently. Cancellation is cooperative: [`Disposable::dispose`] stops
//! further delivery but never interrupts a running procedure or a blocked
//! worker.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Disposable`]: disposable::Disposable
//! [`Disposable::dispose`]: disposable::Disposable::dispose
//! [`Scheduler`]: scheduler::Scheduler

pub mod disposable;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod scheduler;
pub mod subscriber;

#[cfg(test)]
pub(crate) mod test_support;

pub use prelude::*;

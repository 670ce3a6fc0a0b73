//! Operators over [`Observable`](crate::observable::Observable).
//!
//! Each operator returns a new observable wrapping an upstream subscription;
//! the operator module owns the observer struct that does the per-event work.

mod filter;
mod flat_map;
mod map;
mod observe_on;
mod subscribe_on;

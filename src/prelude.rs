//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

pub use crate::disposable::Disposable;
pub use crate::observable::Observable;
pub use crate::observer::{Observer, ObserverAll, ObserverNext};
pub use crate::scheduler::{
  ComputationScheduler, IoScheduler, Scheduler, SingleThreadScheduler, Task,
};
pub use crate::subscriber::Subscriber;

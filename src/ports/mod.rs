//! Ports (trait boundaries) between the core and its drivers.

pub mod learner;
pub mod observer;

pub use learner::Learner;
pub use observer::Observer;

//! Core traits defined in `ripple-core` and implemented by other crates.

pub mod clock;
pub mod identity;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::IdentityStore;

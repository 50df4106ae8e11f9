//! # ripple-core
//!
//! Core crate for the Ripple backend. Contains configuration schemas,
//! the identity type carried by tokens, pagination types, the clock and
//! identity-store seams, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Ripple crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

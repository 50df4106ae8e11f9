//! Core type definitions used across the Ripple workspace.

pub mod identity;
pub mod pagination;

pub use identity::Identity;
pub use pagination::{PageRequest, PageResponse};

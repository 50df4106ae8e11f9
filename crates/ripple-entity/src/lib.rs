//! # ripple-entity
//!
//! Domain entity models for Ripple. Every struct in this crate represents a
//! database row or the input for writing one. Row types derive
//! `sqlx::FromRow`.

pub mod experience;
pub mod follow;
pub mod user;
pub mod video;

//! Follow-graph entities.

pub mod model;

pub use model::Follow;

//! Video domain entities.

pub mod model;

pub use model::{CreateVideo, UpdateVideo, Video};

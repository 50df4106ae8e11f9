//! Experience domain entities.

pub mod model;

pub use model::{CreateExperience, Experience, ExperienceFilter, UpdateExperience};

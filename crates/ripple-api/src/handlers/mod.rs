//! HTTP request handlers organized by domain.

pub mod experiences;
pub mod follows;
pub mod health;
pub mod users;
pub mod videos;

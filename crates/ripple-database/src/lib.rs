//! # ripple-database
//!
//! PostgreSQL pool management, migrations, and one repository per entity.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

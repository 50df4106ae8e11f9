//! Session lifecycle: exchanging refresh tokens for access tokens.

pub mod refresh;

pub use refresh::SessionRefresher;

//! # ripple-auth
//!
//! Authentication core for the Ripple backend.
//!
//! ## Modules
//!
//! - `jwt`: claims, signing secrets, the HS256 codec, token issuance and verification
//! - `gate`: bearer-header parsing and access-token checks for protected routes
//! - `session`: exchanging a refresh token for a fresh access token
//! - `password`: Argon2id password hashing

pub mod error;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod session;

pub use error::AuthError;
pub use gate::AccessGate;
pub use jwt::{Claims, IssuedToken, SigningSecret, TokenIssuer, TokenKeys, TokenPair, TokenType, TokenVerifier};
pub use password::PasswordHasher;
pub use session::SessionRefresher;

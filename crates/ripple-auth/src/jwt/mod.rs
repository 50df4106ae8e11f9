//! JWT claims, signing secrets, encoding, issuance, and verification.

pub mod claims;
pub mod codec;
pub mod issuer;
pub mod keys;
pub mod verifier;

pub use claims::{Claims, TokenType};
pub use issuer::{IssuedToken, TokenIssuer, TokenPair};
pub use keys::{SigningSecret, TokenKeys};
pub use verifier::TokenVerifier;

//! HMAC signing secrets for the two token kinds.

use jsonwebtoken::{DecodingKey, EncodingKey};

use ripple_core::config::AuthConfig;

use super::claims::TokenType;

/// One HS256 secret, held as ready-to-use encoding and decoding keys.
#[derive(Clone)]
pub struct SigningSecret {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

impl SigningSecret {
    /// Creates a secret from raw bytes.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// The access and refresh secrets.
#[derive(Debug, Clone)]
pub struct TokenKeys {
    access: SigningSecret,
    refresh: SigningSecret,
}

impl TokenKeys {
    /// Creates the key set from two raw secrets.
    pub fn new(access: impl AsRef<[u8]>, refresh: impl AsRef<[u8]>) -> Self {
        Self {
            access: SigningSecret::new(access),
            refresh: SigningSecret::new(refresh),
        }
    }

    /// Creates the key set from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.access_secret, &config.refresh_secret)
    }

    /// The secret that signs and verifies tokens of `typ`.
    pub fn secret_for(&self, typ: TokenType) -> &SigningSecret {
        match typ {
            TokenType::Access => &self.access,
            TokenType::Refresh => &self.refresh,
        }
    }
}

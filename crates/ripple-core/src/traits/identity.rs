//! Lookup of account identities by internal id.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::identity::Identity;

/// Resolves internal account ids to their current identity.
///
/// Used by the refresh flow to confirm an account still exists before a
/// new access token is minted for it.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Returns the identity for `id`, or `None` if the account is gone.
    async fn find_identity(&self, id: Uuid) -> AppResult<Option<Identity>>;
}

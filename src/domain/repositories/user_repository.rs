use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::user::{UserId, UserRecord},
};

/// Document store holding registered users
#[async_trait]
pub trait UserRepository {
    /// True when any document carries this `user_id`, whatever its other
    /// fields hold.
    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool, RepositoryError>;

    /// Fails with [`RepositoryError::DuplicateKey`] when the store itself
    /// rejects a second record for the same `user_id`.
    async fn insert(&self, record: &UserRecord) -> Result<(), RepositoryError>;
}

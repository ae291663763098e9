use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{Document, doc},
    error::{Error as MongoError, ErrorKind, WriteFailure},
};

use crate::domain::{
    error::RepositoryError,
    models::user::{UserId, UserRecord},
    repositories::user_repository::UserRepository,
};

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<UserRecord>,
}

impl MongoUserRepository {
    pub fn new(users: Collection<UserRecord>) -> Self {
        Self { users }
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        // raw documents: records written before email validation must still count
        let found = self
            .users
            .clone_with_type::<Document>()
            .find_one(doc! { "user_id": user_id.as_str() })
            .projection(doc! { "_id": 1 })
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        Ok(found.is_some())
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), RepositoryError> {
        self.users.insert_one(record).await.map_err(|e| {
            if is_duplicate_key(&e) {
                RepositoryError::DuplicateKey
            } else {
                RepositoryError::DatabaseError(e.to_string())
            }
        })?;
        Ok(())
    }
}

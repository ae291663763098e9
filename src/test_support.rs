//! In-memory stand-ins for the document store and the blob store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::{self, Document};

use crate::{
    domain::{
        error::{RepositoryError, StorageError},
        models::{
            image::{ImageUpload, ObjectKey},
            user::{UserId, UserRecord},
        },
        repositories::user_repository::UserRepository,
        services::object_storage::ObjectStorage,
    },
    usecase::register_user_usecase::RegisterUserCommand,
};

pub fn sample_command(user_id: &str, file_names: &[&str]) -> RegisterUserCommand {
    RegisterUserCommand {
        user_id: user_id.to_string(),
        name: "Alice".to_string(),
        email_id: "alice@x.com".to_string(),
        phone: "555-1234".to_string(),
        images: file_names
            .iter()
            .map(|name| {
                ImageUpload::new(
                    name.to_string(),
                    Some("image/jpeg".to_string()),
                    name.as_bytes().to_vec(),
                )
            })
            .collect(),
    }
}

#[derive(Default)]
struct RepositoryState {
    documents: Vec<Document>,
    lookups: usize,
    fail_inserts: bool,
    blind_lookups: bool,
}

/// Stores raw BSON documents with a unique constraint on `user_id`
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<Mutex<RepositoryState>>,
}

impl InMemoryUserRepository {
    pub fn failing_inserts() -> Self {
        let repository = Self::default();
        repository.state.lock().unwrap().fail_inserts = true;
        repository
    }

    /// Lookups never find anything, as when two requests race past the check
    pub fn blind_lookups() -> Self {
        let repository = Self::default();
        repository.state.lock().unwrap().blind_lookups = true;
        repository
    }

    /// Insert a document as-is, bypassing record validation
    pub fn seed_document(&self, document: Document) {
        self.state.lock().unwrap().documents.push(document);
    }

    /// Documents that decode into a valid [`UserRecord`]
    pub fn records(&self) -> Vec<UserRecord> {
        self.state
            .lock()
            .unwrap()
            .documents
            .iter()
            .filter_map(|document| bson::from_document(document.clone()).ok())
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.state.lock().unwrap().documents.len()
    }

    pub fn lookups(&self) -> usize {
        self.state.lock().unwrap().lookups
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.lookups += 1;
        if state.blind_lookups {
            return Ok(false);
        }
        Ok(has_user_id(&state.documents, user_id.as_str()))
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_inserts {
            return Err(RepositoryError::DatabaseError(
                "connection reset by peer".to_string(),
            ));
        }
        if has_user_id(&state.documents, record.user_id().as_str()) {
            return Err(RepositoryError::DuplicateKey);
        }
        let document = bson::to_document(record)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        state.documents.push(document);
        Ok(())
    }
}

fn has_user_id(documents: &[Document], user_id: &str) -> bool {
    documents
        .iter()
        .any(|document| document.get_str("user_id").ok() == Some(user_id))
}

#[derive(Default)]
struct StorageState {
    uploaded: Vec<(String, String, Vec<u8>)>,
    calls: usize,
    fail_on: Option<usize>,
}

/// Records uploads; optionally fails the n-th call (1-based)
#[derive(Clone, Default)]
pub struct FakeObjectStorage {
    state: Arc<Mutex<StorageState>>,
}

impl FakeObjectStorage {
    pub fn failing_on(call: usize) -> Self {
        let storage = Self::default();
        storage.state.lock().unwrap().fail_on = Some(call);
        storage
    }

    /// (key, content type, bytes) of every stored object, in upload order
    pub fn uploaded(&self) -> Vec<(String, String, Vec<u8>)> {
        self.state.lock().unwrap().uploaded.clone()
    }

    pub fn upload_calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

#[async_trait]
impl ObjectStorage for FakeObjectStorage {
    async fn upload(
        &self,
        key: &ObjectKey,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), StorageError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail_on == Some(state.calls) {
            return Err(StorageError::UploadFailed(
                "QuotaExceeded: storage quota exceeded".to_string(),
            ));
        }
        state
            .uploaded
            .push((key.as_str().to_string(), content_type.to_string(), data));
        Ok(())
    }
}

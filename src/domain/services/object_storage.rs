use async_trait::async_trait;

use crate::domain::{error::StorageError, models::image::ObjectKey};

/// Blob store that face images are written to
#[async_trait]
pub trait ObjectStorage {
    async fn upload(
        &self,
        key: &ObjectKey,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), StorageError>;
}

use tracing::{debug, error, info, warn};

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::{
        image::{ImageUpload, ObjectKey, user_folder},
        location::BucketLocation,
        user::{EmailAddress, UserId, UserRecord},
    },
    repositories::user_repository::UserRepository,
    services::object_storage::ObjectStorage,
};

/// Raw registration input as received from the form
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub user_id: String,
    pub name: String,
    pub email_id: String,
    pub phone: String,
    pub images: Vec<ImageUpload>,
}

pub struct RegisterUserUsecase<R: UserRepository, S: ObjectStorage> {
    user_repository: R,
    object_storage: S,
    location: BucketLocation,
}

impl<R: UserRepository, S: ObjectStorage> RegisterUserUsecase<R, S> {
    pub fn new(user_repository: R, object_storage: S, location: BucketLocation) -> Self {
        Self {
            user_repository,
            object_storage,
            location,
        }
    }

    /// Registers a user: uniqueness check, sequential image upload, then one
    /// metadata insert.
    ///
    /// Uploads stop at the first failure. Objects written before a failure,
    /// or before a failed insert, stay in the blob store.
    pub async fn register(&self, command: RegisterUserCommand) -> Result<UserRecord, DomainError>
    where
        R: Send + Sync,
        S: Send + Sync,
    {
        let RegisterUserCommand {
            user_id,
            name,
            email_id,
            phone,
            images,
        } = command;

        let user_id = UserId::new(user_id)?;
        if name.is_empty() {
            return Err(DomainError::EmptyField("name"));
        }
        if phone.is_empty() {
            return Err(DomainError::EmptyField("phone"));
        }
        let email_id = EmailAddress::new(email_id)?;

        let exists = self
            .user_repository
            .exists_by_user_id(&user_id)
            .await
            .map_err(|e| {
                error!(user_id = user_id.as_str(), "user lookup failed: {}", e);
                e
            })?;
        if exists {
            warn!(user_id = user_id.as_str(), "rejected duplicate registration");
            return Err(DomainError::UserAlreadyExists(user_id.as_str().to_string()));
        }

        let folder = user_folder(&user_id, &name);
        let total = images.len();
        let mut image_paths = Vec::with_capacity(total);

        for image in images {
            let key = ObjectKey::new(&folder, image.file_name());
            let content_type = image.content_type().to_string();

            if let Err(e) = self
                .object_storage
                .upload(&key, &content_type, image.into_data())
                .await
            {
                error!(
                    user_id = user_id.as_str(),
                    key = key.as_str(),
                    orphaned = image_paths.len(),
                    "image upload failed: {}",
                    e
                );
                return Err(e.into());
            }

            debug!(key = key.as_str(), "uploaded image");
            image_paths.push(self.location.public_url(&key));
        }

        let record = UserRecord::new(user_id, name, email_id, phone, image_paths);

        match self.user_repository.insert(&record).await {
            Ok(()) => {}
            Err(RepositoryError::DuplicateKey) => {
                warn!(
                    user_id = record.user_id().as_str(),
                    "concurrent registration rejected by unique index"
                );
                return Err(DomainError::UserAlreadyExists(
                    record.user_id().as_str().to_string(),
                ));
            }
            Err(e) => {
                error!(
                    user_id = record.user_id().as_str(),
                    orphaned = record.image_paths().len(),
                    "failed to persist user record: {}",
                    e
                );
                return Err(e.into());
            }
        }

        info!(
            user_id = record.user_id().as_str(),
            images = total,
            "registered user"
        );
        Ok(record)
    }
}

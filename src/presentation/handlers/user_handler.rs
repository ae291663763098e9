use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    domain::{
        models::{image::ImageUpload, user::UserRecord},
        repositories::user_repository::UserRepository,
        services::object_storage::ObjectStorage,
    },
    presentation::error::ApiError,
    usecase::register_user_usecase::{RegisterUserCommand, RegisterUserUsecase},
};

// Response

/// json for register response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: String,
    pub name: String,
    pub email_id: String,
    pub phone: String,
    pub image_paths: Vec<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: record.user_id().as_str().to_string(),
            name: record.name().to_string(),
            email_id: record.email_id().as_str().to_string(),
            phone: record.phone().to_string(),
            image_paths: record.image_paths().to_vec(),
        }
    }
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be merged into the main router
pub fn create_user_router<
    R: UserRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
>(
    register_service: RegisterUserUsecase<R, S>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<R, S>))
        .with_state(state)
}

pub struct AppState<R: UserRepository, S: ObjectStorage> {
    pub register_service: Arc<RegisterUserUsecase<R, S>>,
}

impl<R: UserRepository, S: ObjectStorage> Clone for AppState<R, S> {
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
        }
    }
}

/// Form fields collected from a multipart registration request
#[derive(Default)]
struct RegistrationForm {
    user_id: Option<String>,
    name: Option<String>,
    email_id: Option<String>,
    phone: Option<String>,
    images: Vec<ImageUpload>,
}

impl RegistrationForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().unwrap_or("").to_string();

            match field_name.as_str() {
                "user_id" => form.user_id = Some(field.text().await?),
                "name" => form.name = Some(field.text().await?),
                "email_id" => form.email_id = Some(field.text().await?),
                "phone" => form.phone = Some(field.text().await?),
                "images" => {
                    // get filename and content type before the field is consumed
                    let file_name = field
                        .file_name()
                        .map(str::to_string)
                        .ok_or_else(|| ApiError::Form("images: expected an uploaded file".to_string()))?;
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await?;
                    form.images.push(ImageUpload::new(file_name, content_type, data.to_vec()));
                }
                other => debug!("ignoring unexpected form field: {}", other),
            }
        }

        Ok(form)
    }

    fn into_command(self) -> Result<RegisterUserCommand, ApiError> {
        fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
            value.ok_or_else(|| ApiError::Form(format!("field required: {}", name)))
        }

        if self.images.is_empty() {
            return Err(ApiError::Form("field required: images".to_string()));
        }

        Ok(RegisterUserCommand {
            user_id: required(self.user_id, "user_id")?,
            name: required(self.name, "name")?,
            email_id: required(self.email_id, "email_id")?,
            phone: required(self.phone, "phone")?,
            images: self.images,
        })
    }
}

// handler function

/// handler function for register
async fn register<R: UserRepository + Send + Sync, S: ObjectStorage + Send + Sync>(
    State(state): State<AppState<R, S>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let command = RegistrationForm::read(multipart?).await?.into_command()?;
    let record = state.register_service.register(command).await?;
    Ok(Json(record.into()))
}

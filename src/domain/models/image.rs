use crate::domain::models::user::UserId;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const USER_DATA_PREFIX: &str = "user_data";

/// A face image received with a registration request
#[derive(Debug, Clone)]
pub struct ImageUpload {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: String, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type: content_type.unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            data,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Folder holding every image of one user: `user_data/{user_id}_{name}/`
pub fn user_folder(user_id: &UserId, name: &str) -> String {
    format!("{}/{}_{}/", USER_DATA_PREFIX, user_id.as_str(), name)
}

/// Key of an object in the blob store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey(String);
impl ObjectKey {
    pub fn new(folder: &str, file_name: &str) -> Self {
        Self(format!("{}{}", folder, file_name))
    }

    #[cfg(test)]
    pub fn from_raw(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//! Process configuration, read once at startup.

use std::{fmt, net::SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DATABASE: &str = "attendance_system";
const DEFAULT_MONGODB_COLLECTION: &str = "users";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

#[derive(Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

// the URI may carry `user:password@`
impl fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConfig")
            .field("uri", &redact_credentials(&self.uri))
            .field("database", &self.database)
            .field("collection", &self.collection)
            .finish()
    }
}

/// Replace the userinfo of a connection string with `***`.
fn redact_credentials(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://***{}", scheme, &rest[at..]),
        None => uri.to_string(),
    }
}

/// Bucket and region; credentials come from the AWS provider chain
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
}

impl AppConfig {
    /// Load from the process environment, after applying `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::Missing(key));

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "MAX_UPLOAD_BYTES",
                value,
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);

        Ok(Self {
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
                allowed_origins,
                max_upload_bytes,
            },
            mongodb: MongoConfig {
                uri: var("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
                database: var("MONGODB_DATABASE")
                    .unwrap_or_else(|| DEFAULT_MONGODB_DATABASE.to_string()),
                collection: var("MONGODB_COLLECTION")
                    .unwrap_or_else(|| DEFAULT_MONGODB_COLLECTION.to_string()),
            },
            storage: StorageConfig {
                bucket: required("S3_BUCKET_NAME")?,
                region: required("AWS_REGION")?,
            },
        })
    }
}

impl ServerConfig {
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Invalid {
            key: "HOST",
            value: self.host.clone(),
        })
    }
}

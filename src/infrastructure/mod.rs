pub mod mongodb;
pub mod s3_object_storage;
pub mod user_repository;

pub mod image;
pub mod location;
pub mod user;

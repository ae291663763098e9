pub mod root_handler;
pub mod user_handler;

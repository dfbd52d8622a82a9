pub mod api_path;
pub mod config;
pub mod error;
pub mod events;
pub mod image;
pub mod lifecycle;
pub mod number_format;

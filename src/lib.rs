pub mod config;
pub mod editor;
pub mod error;
pub mod frontend;
pub mod models;
pub mod services;
pub mod submission;

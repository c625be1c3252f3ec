pub mod app;
pub mod blog;
pub mod config;
pub mod error;
pub mod llm;
pub mod render;
pub mod server;

pub use error::{Error, Result};

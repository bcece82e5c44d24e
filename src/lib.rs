pub mod config;
pub mod error;
pub mod generate;
pub mod llm;

pub use error::{Error, Result};

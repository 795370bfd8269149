// src/lib.rs

pub mod assist;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod speech;
pub mod stats;

pub use crate::config::AssistantConfig;
pub use crate::core::catalog::Catalog;
pub use crate::core::engine::Assistant;
pub use crate::error::{Error, Result};

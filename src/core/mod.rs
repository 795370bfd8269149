// src/core/mod.rs

pub mod catalog;
pub mod context;
pub mod detector;
pub mod engine;
pub mod replies;
pub mod translator;
pub mod types;

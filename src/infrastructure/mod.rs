//! Infrastructure layer - Files, configuration and rendering

pub mod config;
pub mod export;
pub mod storage;

pub use config::Config;

//! Configuration module for the entry content pipeline
//!
//! This module provides `ContentOptions`, its fluent builder, and validation
//! and JSON loading.

// Sub-modules
pub mod builder;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::ContentOptionsBuilder;
pub use types::ContentOptions;

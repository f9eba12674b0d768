//! Filterbar Core: shared types, errors, and the built-in taxonomy.
//!
//! This crate provides the foundational types used across all Filterbar
//! crates. It has no internal Filterbar dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`dataset`]: [`FilterDataset`], the category → label mapping
//! - [`taxonomy`]: The built-in default dataset
//! - [`ids`]: Checkbox identifier composition
//! - [`collection`]: Validated analysis collection names

pub mod collection;
pub mod dataset;
pub mod error;
pub mod ids;
pub mod taxonomy;

// Re-export key types at crate root for convenience
pub use collection::CollectionName;
pub use dataset::{Category, FilterDataset};
pub use error::{Error, Result};
pub use ids::{
    DOWNLOAD_ROUTE, DOWNLOAD_TRIGGER_ID, FILTER_CONTAINER_ID, IdAllocator, filter_control_id,
};
pub use taxonomy::default_dataset;

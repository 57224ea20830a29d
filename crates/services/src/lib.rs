#![forbid(unsafe_code)]

pub mod catalog_store;
pub mod config;
pub mod content_manager;
pub mod content_services;
pub mod error;
pub mod progress;
pub mod sources;

pub use catalog_store::CatalogStore;
pub use config::{ContentConfig, ContentRoot};
pub use content_manager::ContentManager;
pub use content_services::ContentServices;
pub use error::{
    CatalogSourceError, ConfigError, ContentServicesError, ContentSourceError, ProgressError,
};
pub use progress::{LocalProgressTracker, ProgressTracker};
pub use sources::{CatalogSource, ContentSource, DirSource, HttpSource, StaticContentSource};

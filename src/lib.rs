pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileCatalogSource, StaticCatalog};
pub use config::{cli::LocalStorage, toml_config::DirectoryConfig};
pub use crate::core::{
    browser::{Browser, FilterEvent, FilterState},
    filter::compute_visible,
};
pub use domain::model::{default_departments, Catalog, Course, Department, ALL_DEPARTMENTS};
pub use utils::error::{DirectoryError, Result};

pub mod browser;
pub mod filter;

pub use crate::domain::model::{Catalog, Course, Department};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Storage};
pub use crate::utils::error::Result;

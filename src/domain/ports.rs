use crate::domain::model::{Catalog, Department};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_path(&self) -> Option<&str>;
    fn departments(&self) -> &[Department];
}

/// Supplies the catalog once at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;
}

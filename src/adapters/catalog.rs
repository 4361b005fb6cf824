use crate::core::{Catalog, CatalogSource, Course, Storage};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            Some("toml") => Ok(Self::Toml),
            _ => Err(DirectoryError::UnsupportedFormatError {
                path: path.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Course>),
    Wrapped { courses: Vec<Course> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    courses: Vec<Course>,
}

pub fn parse_catalog(format: CatalogFormat, data: &[u8]) -> Result<Vec<Course>> {
    match format {
        CatalogFormat::Json => match serde_json::from_slice::<JsonCatalog>(data)? {
            JsonCatalog::List(courses) | JsonCatalog::Wrapped { courses } => Ok(courses),
        },
        CatalogFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(data);
            let mut courses = Vec::new();
            for row in reader.deserialize::<Course>() {
                courses.push(row?);
            }
            Ok(courses)
        }
        CatalogFormat::Toml => {
            let content = std::str::from_utf8(data).map_err(|e| DirectoryError::TomlError {
                field: "catalog".to_string(),
                message: e.to_string(),
            })?;
            let catalog: TomlCatalog =
                toml::from_str(content).map_err(|e| DirectoryError::TomlError {
                    field: "catalog".to_string(),
                    message: e.to_string(),
                })?;
            Ok(catalog.courses)
        }
    }
}

/// Loads the catalog from a file through a `Storage` backend.
pub struct FileCatalogSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileCatalogSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl<S: Storage> CatalogSource for FileCatalogSource<S> {
    async fn load(&self) -> Result<Catalog> {
        let format = CatalogFormat::from_path(&self.path)?;
        tracing::debug!("Loading {:?} catalog from {}", format, self.path);

        let data = self.storage.read_file(&self.path).await?;
        let courses = parse_catalog(format, &data)?;
        tracing::debug!("Parsed {} courses", courses.len());
        Ok(Catalog::new(courses))
    }
}

/// An in-memory catalog, for embedding or tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    courses: Vec<Course>,
}

impl StaticCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Catalog> {
        Ok(Catalog::new(self.courses.clone()))
    }
}

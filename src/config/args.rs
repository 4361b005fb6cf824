use crate::app::render::OutputFormat;
use crate::config::toml_config::DirectoryConfig;
use crate::core::ConfigProvider;
use crate::domain::model::ALL_DEPARTMENTS;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "course-connect")]
#[command(about = "Browse the course directory and find study-group links")]
pub struct CliConfig {
    /// Course catalog file (.json, .csv or .toml); overrides [directory].catalog
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Directory config file with [directory] and [[departments]]
    #[arg(long)]
    pub config: Option<String>,

    /// Search text matched against course names and ids
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Department id to filter by
    #[arg(short, long, default_value = ALL_DEPARTMENTS)]
    pub department: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Browse interactively from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Report catalog entries that break the data-model invariants
    #[arg(long)]
    pub lint: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the directory config (or the defaults) and applies the
    /// command-line catalog override.
    pub fn directory_config(&self) -> Result<DirectoryConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                DirectoryConfig::from_file(path)?
            }
            None => DirectoryConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.directory.catalog = Some(catalog.clone());
        }
        Ok(config)
    }

    /// Relative catalog paths resolve against the config file's directory
    /// when the path came from the config file, otherwise the working
    /// directory.
    pub fn storage_base(&self) -> PathBuf {
        match (&self.catalog, &self.config) {
            (None, Some(config)) => Path::new(config)
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            _ => PathBuf::from("."),
        }
    }

    pub fn catalog_path<'a>(&self, config: &'a DirectoryConfig) -> Result<&'a str> {
        config.catalog_path().ok_or_else(|| {
            DirectoryError::config("no catalog given; pass --catalog or set [directory].catalog")
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            validate_path("--catalog", catalog)?;
        }
        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        if self.interactive && self.format != OutputFormat::Text {
            return Err(DirectoryError::InvalidConfigValueError {
                field: "--format".to_string(),
                value: format!("{:?}", self.format).to_lowercase(),
                reason: "interactive mode only renders text".to_string(),
            });
        }
        Ok(())
    }
}

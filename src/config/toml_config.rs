use crate::core::ConfigProvider;
use crate::domain::model::{default_departments, Department};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{validate_departments, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default = "default_departments")]
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorySettings {
    #[serde(default = "default_name")]
    pub name: String,
    pub catalog: Option<String>,
    pub support_contact: Option<String>,
}

fn default_name() -> String {
    "CourseConnect".to_string()
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            catalog: None,
            support_contact: None,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            directory: DirectorySettings::default(),
            departments: default_departments(),
        }
    }
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::TomlError {
            field: "directory_config".to_string(),
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::config(e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        &self.directory.name
    }

    pub fn support_contact(&self) -> Option<&str> {
        self.directory.support_contact.as_deref()
    }
}

impl ConfigProvider for DirectoryConfig {
    fn catalog_path(&self) -> Option<&str> {
        self.directory.catalog.as_deref()
    }

    fn departments(&self) -> &[Department] {
        &self.departments
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.directory.catalog {
            validate_path("directory.catalog", catalog)?;
        }
        validate_departments(&self.departments)
    }
}

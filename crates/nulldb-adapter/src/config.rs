use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AdapterResult;
use crate::strategy::Strategy;

/// Adapter configuration supplied by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Interception policy installed at construction.
    pub strategy: Strategy,
    /// Schema definition location; absolute paths are used verbatim.
    pub schema_path: PathBuf,
    /// Root that relative schema paths are resolved against.
    pub project_root: PathBuf,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Raise,
            schema_path: PathBuf::from("db/schema.toml"),
            project_root: PathBuf::from("."),
        }
    }
}

impl AdapterConfig {
    /// Parse a configuration map from its TOML form.
    pub fn from_toml_str(content: &str) -> AdapterResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the schema definition location against the project root.
    pub fn resolved_schema_path(&self) -> PathBuf {
        if self.schema_path.is_absolute() {
            self.schema_path.clone()
        } else {
            self.project_root.join(&self.schema_path)
        }
    }
}

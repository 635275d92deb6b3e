//! Generator configuration
//!
//! A configuration file names the SObjects to generate and how their
//! identifiers are derived:
//!
//! ```json
//! {
//!   "outPath": "src/generated/sobs.ts",
//!   "autoConvertNames": true,
//!   "sObjects": [
//!     "Account",
//!     { "apiName": "Contact", "fieldMappings": [{ "apiName": "Name", "propName": "fullName" }] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emit::EmitOptions;

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config lists no SObjects to generate")]
    Empty,
}

/// Explicit override of a generated property name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Raw field or relationship API name, matched case-insensitively
    pub api_name: String,
    /// Property name to generate instead
    pub prop_name: String,
}

impl FieldMapping {
    pub fn new(api_name: impl Into<String>, prop_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            prop_name: prop_name.into(),
        }
    }
}

/// Generation settings for one SObject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SObjectConfig {
    pub api_name: String,
    /// Derive identifiers from API names (`My_Field__c` -> `myField`) instead of passing them through
    #[serde(default = "default_auto_convert", alias = "useNamingConvention")]
    pub auto_convert_names: bool,
    #[serde(default)]
    pub field_mappings: Vec<FieldMapping>,
}

fn default_auto_convert() -> bool {
    true
}

impl SObjectConfig {
    /// Config with naming convention enabled and no overrides
    pub fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            auto_convert_names: true,
            field_mappings: Vec::new(),
        }
    }

    /// Config that keeps raw API names verbatim
    pub fn verbatim(api_name: impl Into<String>) -> Self {
        Self::new(api_name).with_auto_convert(false)
    }

    pub fn with_auto_convert(mut self, auto_convert_names: bool) -> Self {
        self.auto_convert_names = auto_convert_names;
        self
    }

    pub fn with_mapping(mut self, api_name: impl Into<String>, prop_name: impl Into<String>) -> Self {
        self.field_mappings.push(FieldMapping::new(api_name, prop_name));
        self
    }

    /// Override registered for a raw API name, if any
    pub fn mapping_for(&self, api_name: &str) -> Option<&FieldMapping> {
        self.field_mappings
            .iter()
            .find(|m| m.api_name.eq_ignore_ascii_case(api_name))
    }
}

/// An `sObjects` entry: either a bare API name or a full object config
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SObjectEntry {
    Name(String),
    Config(RawSObjectConfig),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSObjectConfig {
    api_name: String,
    #[serde(default, alias = "useNamingConvention")]
    auto_convert_names: Option<bool>,
    #[serde(default)]
    field_mappings: Vec<FieldMapping>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeneratorConfig {
    #[serde(default)]
    out_path: Option<PathBuf>,
    #[serde(default)]
    auto_convert_names: Option<bool>,
    #[serde(default)]
    runtime_module: Option<String>,
    #[serde(default, rename = "sObjects")]
    sobjects: Vec<SObjectEntry>,
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Where the generated declarations go; stdout when unset
    pub out_path: Option<PathBuf>,
    /// SObjects in generation order
    pub sobjects: Vec<SObjectConfig>,
    pub emit: EmitOptions,
}

impl GeneratorConfig {
    /// Read and parse a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse a JSON config document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawGeneratorConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: PathBuf::from("<inline>"),
                source,
            })?;

        let auto_convert = raw.auto_convert_names.unwrap_or(true);
        let sobjects: Vec<SObjectConfig> = raw
            .sobjects
            .into_iter()
            .map(|entry| match entry {
                SObjectEntry::Name(api_name) => SObjectConfig::new(api_name).with_auto_convert(auto_convert),
                SObjectEntry::Config(c) => SObjectConfig {
                    api_name: c.api_name,
                    auto_convert_names: c.auto_convert_names.unwrap_or(auto_convert),
                    field_mappings: c.field_mappings,
                },
            })
            .collect();

        if sobjects.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut emit = EmitOptions::default();
        if let Some(module) = raw.runtime_module {
            emit.runtime_module = module;
        }

        Ok(Self {
            out_path: raw.out_path,
            sobjects,
            emit,
        })
    }
}

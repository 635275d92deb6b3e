//! Describe metadata sources
//!
//! The generator only needs `describe(api_name)`. The network client lives
//! outside this crate; what ships here is an in-memory schema and a reader for
//! describe JSON saved to disk.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::schema::{SObjectDescribe, SalesforceSchema};

/// Errors raised by a describe source
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("SObject '{0}' not found or not accessible")]
    NotFound(String),

    #[error("Cannot read describe file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid describe JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of SObject describe metadata
#[async_trait]
pub trait DescribeFetcher: Send + Sync {
    async fn describe(&self, api_name: &str) -> Result<SObjectDescribe, FetchError>;
}

#[async_trait]
impl DescribeFetcher for SalesforceSchema {
    async fn describe(&self, api_name: &str) -> Result<SObjectDescribe, FetchError> {
        self.get_object(api_name)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(api_name.to_string()))
    }
}

/// Directory of `<ApiName>.json` describe results
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DescribeDirectory {
    root: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DescribeDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Locate the describe file, matching the file stem case-insensitively
    async fn locate(&self, api_name: &str) -> Result<PathBuf, FetchError> {
        let exact = self.root.join(format!("{}.json", api_name));
        if tokio::fs::try_exists(&exact).await.unwrap_or(false) {
            return Ok(exact);
        }

        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|source| FetchError::Io {
                path: self.root.clone(),
                source,
            })?;

        while let Some(entry) = entries.next_entry().await.map_err(|source| FetchError::Io {
            path: self.root.clone(),
            source,
        })? {
            let path = entry.path();
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            let stem_matches = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem.eq_ignore_ascii_case(api_name));
            if is_json && stem_matches {
                return Ok(path);
            }
        }

        Err(FetchError::NotFound(api_name.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl DescribeFetcher for DescribeDirectory {
    async fn describe(&self, api_name: &str) -> Result<SObjectDescribe, FetchError> {
        let path = self.locate(api_name).await?;
        tracing::debug!(object = api_name, path = %path.display(), "reading describe");

        let bytes = tokio::fs::read(&path).await.map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Parse { path, source })
    }
}

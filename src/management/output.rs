use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::ArtistResult;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("cannot access {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot serialize output document: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Holds the discovered artists and writes them as the output document.
///
/// The document is a pretty printed JSON array in the order the genres were
/// processed. Every persist overwrites the previous file.
pub struct OutputManager {
    path: PathBuf,
    results: Vec<ArtistResult>,
}

impl OutputManager {
    pub fn new(path: impl Into<PathBuf>, results: Option<Vec<ArtistResult>>) -> Self {
        Self {
            path: path.into(),
            results: results.unwrap_or_default(),
        }
    }

    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, OutputError> {
        let path = path.into();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|source| OutputError::IoError {
                path: path.clone(),
                source,
            })?;
        let results: Vec<ArtistResult> = serde_json::from_str(&content)?;
        Ok(Self { path, results })
    }

    pub async fn persist(&self) -> Result<(), OutputError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|source| OutputError::IoError {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let json = serde_json::to_string_pretty(&self.results)?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|source| OutputError::IoError {
                path: self.path.clone(),
                source,
            })
    }

    pub fn add_result(&mut self, result: ArtistResult) -> &mut Self {
        self.results.push(result);
        self
    }

    pub fn results(&self) -> &[ArtistResult] {
        &self.results
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

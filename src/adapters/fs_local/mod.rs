// Local filesystem adapter - Output writing through tokio::fs

use crate::domain::errors::*;
use crate::ports::*;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// Local filesystem adapter
#[derive(Debug, Clone, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn file_exists(&self, file_path: &str) -> Result<bool, DomainError> {
        fs::try_exists(file_path)
            .await
            .map_err(|e| DomainError::ExportIo(format!("Failed to check {}: {}", file_path, e)))
    }

    async fn create_directory(&self, dir_path: &str) -> Result<(), DomainError> {
        fs::create_dir_all(dir_path).await.map_err(|e| {
            DomainError::ExportIo(format!("Failed to create directory {}: {}", dir_path, e))
        })
    }

    async fn write_text(&self, file_path: &str, contents: &str) -> Result<(), DomainError> {
        if let Some(parent) = Path::new(file_path).parent() {
            if !parent.as_os_str().is_empty() {
                self.create_directory(parent.to_string_lossy().as_ref()).await?;
            }
        }

        fs::write(file_path, contents.as_bytes()).await.map_err(|e| {
            DomainError::ExportIo(format!("Failed to write {}: {}", file_path, e))
        })
    }

    async fn absolute_path(&self, file_path: &str) -> Result<String, DomainError> {
        std::path::absolute(file_path)
            .map(|path| path.to_string_lossy().to_string())
            .map_err(|e| DomainError::BadArgs(format!("Failed to resolve path {}: {}", file_path, e)))
    }
}

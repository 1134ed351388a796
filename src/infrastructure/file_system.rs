use crate::core::interfaces::FileSystemService;
use crate::utils::{BuildError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

pub struct TokioFileSystemService;

#[async_trait::async_trait]
impl FileSystemService for TokioFileSystemService {
    async fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => BuildError::FileNotFound(path.to_path_buf()),
            _ => BuildError::Io(e),
        })
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.create_directory(parent).await?;
        }

        fs::write(path, content).await.map_err(BuildError::Io)
    }

    async fn create_directory(&self, path: &Path) -> Result<()> {
        // create_dir_all succeeds when the directory already exists
        fs::create_dir_all(path).await.map_err(BuildError::Io)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

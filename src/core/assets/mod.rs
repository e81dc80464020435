use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::core::error::{InstallerError, InstallerResult};

/// Read-only named-blob storage bundled with the application.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Open the named blob as a readable byte stream.
    async fn open(&self, name: &str) -> InstallerResult<Box<dyn AsyncRead + Send + Unpin>>;
}

/// Asset bundle laid out as a directory shipped next to the application,
/// e.g. `resources/worlds.zip` under the bundle root.
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetSource for DirAssetSource {
    async fn open(&self, name: &str) -> InstallerResult<Box<dyn AsyncRead + Send + Unpin>> {
        let path = self.root.join(name);
        match tokio::fs::File::open(&path).await {
            Ok(file) => Ok(Box::new(file)),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(InstallerError::AssetNotFound(name.to_string()))
            }
            Err(source) => Err(InstallerError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use uuid::Uuid;

    fn bundle_dir() -> PathBuf {
        std::env::temp_dir().join(format!("moddedpe-assets-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn opens_existing_blob_as_stream() {
        let root = bundle_dir();
        std::fs::create_dir_all(root.join("resources")).unwrap();
        std::fs::write(root.join("resources/worlds.zip"), b"not really a zip").unwrap();

        let source = DirAssetSource::new(root.clone());
        let mut blob = source.open("resources/worlds.zip").await.unwrap();
        let mut bytes = Vec::new();
        blob.read_to_end(&mut bytes).await.unwrap();
        assert_eq!(bytes, b"not really a zip");

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn missing_blob_is_asset_not_found() {
        let root = bundle_dir();
        std::fs::create_dir_all(&root).unwrap();

        let source = DirAssetSource::new(root.clone());
        let err = source.open("resources/worlds.zip").await.err().unwrap();
        assert!(matches!(err, InstallerError::AssetNotFound(name) if name == "resources/worlds.zip"));

        let _ = std::fs::remove_dir_all(&root);
    }
}

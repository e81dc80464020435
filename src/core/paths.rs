use std::path::{Path, PathBuf};

use crate::core::error::{InstallerError, InstallerResult};

const APP_DIR_NAME: &str = "ModdedPE";

/// Filesystem roots the installer works against.
///
/// `storage_root` is the external storage root the `games/com.mojang/...`
/// destinations hang off. `staging_dir` holds staged archives while they are
/// being extracted.
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    storage_root: PathBuf,
    staging_dir: PathBuf,
}

impl ResourcePaths {
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Build paths rooted at explicit directories, creating them if missing.
    pub fn rooted_at(storage_root: &Path, staging_dir: &Path) -> InstallerResult<Self> {
        Ok(Self {
            storage_root: canonical_or_create_dir(storage_root)?,
            staging_dir: canonical_or_create_dir(staging_dir)?,
        })
    }

    /// Platform defaults: the user data dir for storage, the OS temp dir for
    /// staging.
    pub fn resolve() -> InstallerResult<Self> {
        let storage_root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);
        let staging_dir = std::env::temp_dir().join(APP_DIR_NAME);

        Self::rooted_at(&storage_root, &staging_dir)
    }
}

fn canonical_or_create_dir(path: &Path) -> InstallerResult<PathBuf> {
    std::fs::create_dir_all(path).map_err(|source| InstallerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::canonicalize(path).map_err(|source| InstallerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn rooted_at_creates_missing_directories() {
        let base = std::env::temp_dir().join(format!("moddedpe-paths-{}", Uuid::new_v4()));
        let storage = base.join("storage");
        let staging = base.join("staging");

        let paths = ResourcePaths::rooted_at(&storage, &staging).unwrap();
        assert!(paths.storage_root().is_dir());
        assert!(paths.staging_dir().is_dir());

        let _ = std::fs::remove_dir_all(&base);
    }
}

// ─── Install Task ───
// Stages each bundled archive into a temp file and extracts it into the
// game storage tree.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::io::AsyncRead;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::assets::AssetSource;
use crate::core::error::{InstallerError, InstallerResult};
use crate::core::paths::ResourcePaths;

use super::extract::extract_zip;
use super::mapping::{InstallMapping, INSTALL_MAPPINGS};
use super::report::{InstallReport, PackInstallResult, PackOutcome};

/// Installs the bundled pack archives into the game storage tree.
pub struct ResourceInstaller<S: AssetSource> {
    assets: S,
    paths: ResourcePaths,
}

impl<S: AssetSource> ResourceInstaller<S> {
    pub fn new(assets: S, paths: ResourcePaths) -> Self {
        Self { assets, paths }
    }

    /// Install all four bundled archives, in install-table order.
    ///
    /// Best-effort: a failing pack is logged, recorded in the report, and the
    /// remaining packs are still attempted. Never returns an error, so one
    /// missing pack cannot block installation of the others.
    pub async fn install(&self) -> InstallReport {
        let started_at = Utc::now();
        let mut packs = Vec::with_capacity(INSTALL_MAPPINGS.len());

        for mapping in &INSTALL_MAPPINGS {
            let outcome = match self.install_pack(mapping).await {
                Ok(files) => {
                    info!(
                        "Installed {} ({} files) into {}",
                        mapping.kind, files, mapping.destination
                    );
                    PackOutcome::Installed { files }
                }
                Err(err) => {
                    warn!("Skipping {}: {}", mapping.kind, err);
                    PackOutcome::Failed {
                        message: err.to_string(),
                    }
                }
            };

            packs.push(PackInstallResult {
                kind: mapping.kind,
                asset: mapping.asset.to_string(),
                destination: self.paths.storage_root().join(mapping.destination),
                outcome,
            });
        }

        InstallReport {
            started_at,
            finished_at: Utc::now(),
            packs,
        }
    }

    async fn install_pack(&self, mapping: &InstallMapping) -> InstallerResult<usize> {
        let staged = StagedArchive::create(self.paths.staging_dir());

        let mut blob = self.assets.open(mapping.asset).await?;
        staged.fill(&mut blob).await?;

        let dest_dir = self.paths.storage_root().join(mapping.destination);
        debug!("Extracting {} into {:?}", mapping.asset, dest_dir);
        extract_zip(staged.path(), &dest_dir)
    }
}

/// A uniquely named temp zip in the staging dir, removed on drop no matter
/// how the install attempt ends.
struct StagedArchive {
    path: PathBuf,
}

impl StagedArchive {
    fn create(staging_dir: &Path) -> Self {
        Self {
            path: staging_dir.join(format!("{}.zip", Uuid::new_v4())),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn fill<R>(&self, blob: &mut R) -> InstallerResult<()>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let mut file =
            tokio::fs::File::create(&self.path)
                .await
                .map_err(|source| InstallerError::Io {
                    path: self.path.clone(),
                    source,
                })?;

        tokio::io::copy(blob, &mut file)
            .await
            .map_err(|source| InstallerError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(())
    }
}

impl Drop for StagedArchive {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

// ─── ModdedPE Resources ───
// Installs the zip archives bundled with the application into the game's
// external storage tree.

pub mod core;

pub use crate::core::assets::{AssetSource, DirAssetSource};
pub use crate::core::error::{InstallerError, InstallerResult};
pub use crate::core::installer::{
    InstallMapping, InstallReport, PackInstallResult, PackKind, PackOutcome, ResourceInstaller,
    INSTALL_MAPPINGS,
};
pub use crate::core::paths::ResourcePaths;

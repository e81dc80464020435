pub mod extract;
pub mod mapping;
pub mod report;
mod task;

pub use mapping::{InstallMapping, PackKind, INSTALL_MAPPINGS};
pub use report::{InstallReport, PackInstallResult, PackOutcome};
pub use task::ResourceInstaller;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::mapping::PackKind;

/// Outcome of one pack's installation attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PackOutcome {
    /// The archive was extracted; `files` entries were written.
    Installed { files: usize },
    /// The attempt failed; the other packs were still processed.
    Failed { message: String },
}

/// Per-pack result, in install-table order.
#[derive(Debug, Clone, Serialize)]
pub struct PackInstallResult {
    pub kind: PackKind,
    pub asset: String,
    pub destination: PathBuf,
    pub outcome: PackOutcome,
}

impl PackInstallResult {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, PackOutcome::Installed { .. })
    }
}

/// Unified result of one `install()` run.
///
/// `install()` itself never fails; callers that care about partial failure
/// inspect the report instead of a log stream.
#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub packs: Vec<PackInstallResult>,
}

impl InstallReport {
    pub fn fully_installed(&self) -> bool {
        self.packs.iter().all(PackInstallResult::succeeded)
    }

    pub fn failures(&self) -> impl Iterator<Item = &PackInstallResult> {
        self.packs.iter().filter(|pack| !pack.succeeded())
    }
}

// ─── ModdedPE Resources Core ───
// Backend for installing the pack archives bundled with the application.
//
// Architecture:
//   core/
//     assets/     — Asset bundle abstraction (named blobs as byte streams)
//     installer/  — Install table, archive staging, zip extraction, report
//     paths       — Storage root + staging dir resolution
//     error       — Central error type

pub mod assets;
pub mod error;
pub mod installer;
pub mod paths;

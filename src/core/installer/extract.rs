use std::path::{Component, Path, PathBuf};

use crate::core::error::{InstallerError, InstallerResult};

/// Extract every entry of the zip at `zip_path` into `dest_dir`, creating the
/// directory and any missing intermediates. Existing files are overwritten
/// but nothing is deleted, so re-extracting the same archive is idempotent.
///
/// Returns the number of files written.
pub fn extract_zip(zip_path: &Path, dest_dir: &Path) -> InstallerResult<usize> {
    let zip_file = std::fs::File::open(zip_path).map_err(|source| InstallerError::Io {
        path: zip_path.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(zip_file)?;

    std::fs::create_dir_all(dest_dir).map_err(|source| InstallerError::Io {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    let mut files_written = 0_usize;
    for index in 0..archive.len() {
        let mut zipped = archive.by_index(index)?;

        // Entries that would escape the destination are rejected outright.
        let enclosed_name = zipped.enclosed_name().ok_or_else(|| {
            InstallerError::Other(format!("Invalid zip entry path: {}", zipped.name()))
        })?;
        let mut rel_path = PathBuf::new();
        for component in enclosed_name.components() {
            if let Component::Normal(part) = component {
                rel_path.push(part);
            }
        }
        if rel_path.as_os_str().is_empty() {
            continue;
        }

        let out_path = dest_dir.join(rel_path);
        if zipped.name().ends_with('/') {
            std::fs::create_dir_all(&out_path).map_err(|source| InstallerError::Io {
                path: out_path,
                source,
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| InstallerError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut out = std::fs::File::create(&out_path).map_err(|source| InstallerError::Io {
            path: out_path.clone(),
            source,
        })?;
        std::io::copy(&mut zipped, &mut out).map_err(|source| InstallerError::Io {
            path: out_path,
            source,
        })?;
        files_written += 1;
    }

    Ok(files_written)
}

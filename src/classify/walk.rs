//! Best-effort recursive file enumeration.

use std::fs;
use std::path::{Path, PathBuf};

/// Collects every file under `dir`, depth-first.
///
/// Unreadable directories and entries are skipped and counted in `errors`;
/// enumeration always continues. Symlinked directories are not followed.
pub(crate) fn collect_files(dir: &Path, files: &mut Vec<PathBuf>, errors: &mut usize) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("skipping unreadable directory {}: {}", dir.display(), err);
            *errors += 1;
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping unreadable entry under {}: {}", dir.display(), err);
                *errors += 1;
                continue;
            }
        };

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                log::debug!(
                    "skipping entry with unreadable type {}: {}",
                    entry.path().display(),
                    err
                );
                *errors += 1;
                continue;
            }
        };

        if file_type.is_dir() {
            collect_files(&entry.path(), files, errors);
        } else if file_type.is_file() {
            files.push(entry.path());
        }
    }
}

use std::fs;
#[cfg(unix)]
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Which branch the reconciler took, so callers and tests can see whether
/// anything was mutated.
#[derive(Debug, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The shortcut was already a symlink to the right target; nothing touched.
    AlreadyCorrect,
    Created {
        /// Where prior content was moved, if the path held a directory or file.
        backed_up: Option<PathBuf>,
        /// True when a symlink with the wrong target was removed.
        replaced_link: bool,
    },
}

/// Ensure `user_apps` is a symlink pointing at `system_apps`.
///
/// A symlink with the wrong target is removed (links carry no content worth
/// keeping). A real directory or file is renamed to `<path>.bak.<pid>` so its
/// content survives; the pid keeps backup names from colliding across runs.
/// Any filesystem failure is fatal, there is no retry.
pub fn ensure_shortcut(user_apps: &Path, system_apps: &Path) -> Result<ReconcileOutcome, Error> {
    log::info!("Checking shortcut at {}", user_apps.display());

    let mut backed_up = None;
    let mut replaced_link = false;

    // symlink_metadata so a dangling link is still seen as a link.
    match fs::symlink_metadata(user_apps) {
        Ok(meta) if meta.file_type().is_symlink() => {
            let target =
                fs::read_link(user_apps).map_err(|e| Error::fs("read link", user_apps, e))?;
            if target == system_apps {
                log::info!(
                    "{} already points to {}",
                    user_apps.display(),
                    system_apps.display()
                );
                return Ok(ReconcileOutcome::AlreadyCorrect);
            }
            log::warn!(
                "{} points somewhere else: {}",
                user_apps.display(),
                target.display()
            );
            fs::remove_file(user_apps).map_err(|e| Error::fs("remove link", user_apps, e))?;
            log::info!("Removed bad symlink");
            replaced_link = true;
        }
        Ok(meta) => {
            let kind = if meta.is_dir() { "directory" } else { "file" };
            let backup = backup_path(user_apps);
            fs::rename(user_apps, &backup).map_err(|e| Error::fs("rename", user_apps, e))?;
            log::warn!(
                "Moved existing {} {} to {}",
                kind,
                user_apps.display(),
                backup.display()
            );
            backed_up = Some(backup);
        }
        // Absent path, only the link needs creating.
        Err(_) => {}
    }

    symlink(system_apps, user_apps).map_err(|e| Error::fs("create symlink at", user_apps, e))?;
    log::info!(
        "Created symlink: {} -> {}",
        user_apps.display(),
        system_apps.display()
    );

    Ok(ReconcileOutcome::Created {
        backed_up,
        replaced_link,
    })
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".bak.{}", std::process::id()));
    PathBuf::from(name)
}

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// The application launched on every run. There is deliberately no CLI
/// surface for overriding this.
pub const APP_NAME: &str = "Safari";

const SYSTEM_APPS: &str = "/Applications";
const BUNDLE_EXTENSION: &str = ".app";
const POLL_ATTEMPTS: u32 = 20;
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Explicit values for everything the run depends on. Built once in `main`
/// and passed down, never read from or written to disk.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Per-user shortcut path, expected to be a symlink to `system_apps`.
    pub user_apps: PathBuf,
    /// System-wide application directory the shortcut must point at.
    pub system_apps: PathBuf,
    pub app_name: String,
    pub bundle_extension: &'static str,
    pub poll_attempts: u32,
    pub poll_interval: Duration,
}

impl Settings {
    pub fn new() -> Result<Self, Error> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        Ok(Self {
            user_apps: home.join("Applications"),
            system_apps: PathBuf::from(SYSTEM_APPS),
            app_name: APP_NAME.to_string(),
            bundle_extension: BUNDLE_EXTENSION,
            poll_attempts: POLL_ATTEMPTS,
            poll_interval: POLL_INTERVAL,
        })
    }

    /// Path of the application bundle under the reconciled shortcut
    /// directory, e.g. `~/Applications/Safari.app`.
    pub fn bundle_path(&self) -> PathBuf {
        self.user_apps
            .join(format!("{}{}", self.app_name, self.bundle_extension))
    }

    #[cfg(test)]
    pub fn for_test(user_apps: &std::path::Path, app_name: &str) -> Self {
        Self {
            user_apps: user_apps.to_path_buf(),
            system_apps: PathBuf::from(SYSTEM_APPS),
            app_name: app_name.to_string(),
            bundle_extension: BUNDLE_EXTENSION,
            poll_attempts: 3,
            poll_interval: Duration::ZERO,
        }
    }
}

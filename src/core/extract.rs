// ─── APK Extraction ───
// Wraps the external mcpelauncher-extract tool.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::LauncherPaths;

const EXTRACT_TIMEOUT_SECS: u64 = 120;

/// Installs an APK as a named version by shelling out to the extractor.
pub struct ApkExtractor {
    extract_bin: PathBuf,
    versions_dir: PathBuf,
}

impl ApkExtractor {
    pub fn new(paths: &LauncherPaths) -> Self {
        Self {
            extract_bin: paths.extract_bin.clone(),
            versions_dir: paths.versions_dir.clone(),
        }
    }

    /// Extract `apk` into `versions/<name>`.
    ///
    /// Validates inputs before touching the filesystem, then runs the
    /// extractor synchronously. A non-zero exit is a single failure carrying
    /// whatever the tool wrote to stderr; the pre-created target directory is
    /// left in place.
    pub async fn extract(&self, apk: &Path, name: &str) -> LauncherResult<PathBuf> {
        if name.trim().is_empty() {
            return Err(LauncherError::MissingInput("version name"));
        }
        if apk.as_os_str().is_empty() {
            return Err(LauncherError::MissingInput("APK path"));
        }
        if !apk.is_file() {
            return Err(LauncherError::Io {
                path: apk.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "APK not found"),
            });
        }
        if !apk
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("apk"))
        {
            return Err(LauncherError::NotAnApk(apk.to_path_buf()));
        }

        let target = self.versions_dir.join(name);
        tokio::fs::create_dir_all(&target)
            .await
            .map_err(|source| LauncherError::Io {
                path: target.clone(),
                source,
            })?;

        info!(
            "Extracting {:?} into {:?} with {:?}",
            apk, target, self.extract_bin
        );

        let run = tokio::process::Command::new(&self.extract_bin)
            .arg(apk)
            .arg(&target)
            .output();

        let output = tokio::time::timeout(Duration::from_secs(EXTRACT_TIMEOUT_SECS), run)
            .await
            .map_err(|_| LauncherError::ExtractionTimeout(EXTRACT_TIMEOUT_SECS))?
            .map_err(|source| LauncherError::Spawn {
                program: self.extract_bin.to_string_lossy().to_string(),
                source,
            })?;

        if !output.stdout.is_empty() {
            debug!(
                "Extractor stdout: {}",
                String::from_utf8_lossy(&output.stdout).trim_end()
            );
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            warn!(
                "Extractor failed with {:?}, target dir {:?} kept",
                output.status.code(),
                target
            );
            return Err(LauncherError::ExtractionFailed {
                code: output.status.code(),
                stderr,
            });
        }

        info!("Version '{}' installed at {:?}", name, target);
        Ok(target)
    }
}

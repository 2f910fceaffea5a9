use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::error::{LauncherError, LauncherResult};

const APP_DIR_NAME: &str = "minecraft-launcher";
const FLATPAK_APP_ID: &str = "org.bedrocklauncher.launcher";
const LAUNCHER_SUBDIR: &str = "minecraft-bedrock";

const EXTRACT_BIN: &str = "mcpelauncher-extract";
const CLIENT_BIN: &str = "mcpelauncher-client";
const FLATPAK_BIN_DIR: &str = "/app/bin";

/// Resolved directory layout and backend tool locations.
///
/// Computed once at startup. Layout under the data dir:
///
/// ```text
/// <data>/minecraft-bedrock/
///   versions/   — one directory per installed version
///   profiles/   — per-version save data, keyed by version name
///   logs/
///   shortcuts/  — generated .desktop files
///   config.json
/// ```
#[derive(Debug, Clone)]
pub struct LauncherPaths {
    pub data_dir: PathBuf,
    pub launcher_dir: PathBuf,
    pub versions_dir: PathBuf,
    pub profiles_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub shortcuts_dir: PathBuf,
    pub config_file: PathBuf,
    pub extract_bin: PathBuf,
    pub client_bin: PathBuf,
    pub is_flatpak: bool,
}

impl LauncherPaths {
    /// Resolve all paths from the environment.
    ///
    /// Data dir precedence: `BEDROCK_LAUNCHER_DATA_DIR` override, then the
    /// Flatpak sandbox data dir when `FLATPAK_ID` is set, then the XDG data
    /// dir with a `~/.minecraft-launcher` fallback.
    pub fn resolve() -> Self {
        let is_flatpak = std::env::var_os("FLATPAK_ID").is_some();

        let data_dir = if let Some(over) = std::env::var_os("BEDROCK_LAUNCHER_DATA_DIR") {
            let dir = PathBuf::from(over);
            debug!("Using data dir override: {:?}", dir);
            dir
        } else if is_flatpak {
            let base = std::env::var_os("XDG_DATA_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| {
                    home_dir()
                        .join(".var/app")
                        .join(FLATPAK_APP_ID)
                        .join("data")
                });
            // Keep existing user data reachable across launcher updates.
            base.join("minecraft")
        } else {
            dirs::data_dir()
                .map(|d| d.join(APP_DIR_NAME))
                .unwrap_or_else(|| home_dir().join(".minecraft-launcher"))
        };

        let mut paths = Self::with_data_dir(data_dir, is_flatpak);

        if let Some(over) = std::env::var_os("MCPELAUNCHER_EXTRACT") {
            debug!("Extractor override: {:?}", over);
            paths.extract_bin = PathBuf::from(over);
        }
        if let Some(over) = std::env::var_os("MCPELAUNCHER_CLIENT") {
            debug!("Client override: {:?}", over);
            paths.client_bin = PathBuf::from(over);
        }

        paths
    }

    /// Build the fixed layout below an explicit data dir.
    pub fn with_data_dir(data_dir: PathBuf, is_flatpak: bool) -> Self {
        let launcher_dir = data_dir.join(LAUNCHER_SUBDIR);

        let (extract_bin, client_bin) = if is_flatpak {
            (
                Path::new(FLATPAK_BIN_DIR).join(EXTRACT_BIN),
                Path::new(FLATPAK_BIN_DIR).join(CLIENT_BIN),
            )
        } else {
            (PathBuf::from(EXTRACT_BIN), PathBuf::from(CLIENT_BIN))
        };

        Self {
            versions_dir: launcher_dir.join("versions"),
            profiles_dir: launcher_dir.join("profiles"),
            logs_dir: launcher_dir.join("logs"),
            shortcuts_dir: launcher_dir.join("shortcuts"),
            config_file: launcher_dir.join("config.json"),
            launcher_dir,
            data_dir,
            extract_bin,
            client_bin,
            is_flatpak,
        }
    }

    /// Create the directory tree if missing. Idempotent.
    pub fn ensure_dirs(&self) -> LauncherResult<()> {
        for dir in [
            &self.launcher_dir,
            &self.versions_dir,
            &self.profiles_dir,
            &self.logs_dir,
            &self.shortcuts_dir,
        ] {
            std::fs::create_dir_all(dir).map_err(|source| LauncherError::Io {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Profile directory for a version, keyed by version name.
    ///
    /// The association is explicit: `profiles/<name>` next to
    /// `versions/<name>`. Nothing is derived from the version path's string
    /// form, so versions living outside the standard tree still map to a
    /// well-defined profile.
    pub fn profile_dir(&self, version_name: &str) -> PathBuf {
        self.profiles_dir.join(version_name)
    }

    /// Check that both backend executables can be found. Missing tools are
    /// reported, not enforced; install and launch attempts proceed anyway.
    pub fn probe_backend(&self) -> BackendStatus {
        let status = BackendStatus {
            extractor: locate_executable(&self.extract_bin),
            client: locate_executable(&self.client_bin),
        };
        if status.extractor.is_none() {
            warn!("{:?} not found; APK installs will fail", self.extract_bin);
        }
        if status.client.is_none() {
            warn!("{:?} not found; launches will fail", self.client_bin);
        }
        status
    }
}

/// Outcome of the startup backend probe.
#[derive(Debug, Clone)]
pub struct BackendStatus {
    pub extractor: Option<PathBuf>,
    pub client: Option<PathBuf>,
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Find an executable either at its absolute path or on `PATH`.
fn locate_executable(bin: &Path) -> Option<PathBuf> {
    if bin.is_absolute() {
        return bin.is_file().then(|| bin.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(bin))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_hangs_off_launcher_subdir() {
        let paths = LauncherPaths::with_data_dir(PathBuf::from("/data"), false);
        assert_eq!(
            paths.versions_dir,
            PathBuf::from("/data/minecraft-bedrock/versions")
        );
        assert_eq!(
            paths.profiles_dir,
            PathBuf::from("/data/minecraft-bedrock/profiles")
        );
        assert_eq!(
            paths.config_file,
            PathBuf::from("/data/minecraft-bedrock/config.json")
        );
    }

    #[test]
    fn profile_dir_keyed_by_version_name() {
        let paths = LauncherPaths::with_data_dir(PathBuf::from("/data"), false);
        let version_dir = paths.versions_dir.join("1.20.1");
        let profile = paths.profile_dir("1.20.1");

        assert_eq!(
            profile,
            PathBuf::from("/data/minecraft-bedrock/profiles/1.20.1")
        );
        // A version and its profile always share the same basename.
        assert_eq!(version_dir.file_name(), profile.file_name());
    }

    #[test]
    fn profile_mapping_is_stable_for_nonstandard_paths() {
        // Versions imported from outside the tree still get a profile under
        // profiles/, instead of a silently broken path rewrite.
        let paths = LauncherPaths::with_data_dir(PathBuf::from("/data"), false);
        assert_eq!(
            paths.profile_dir("imported"),
            PathBuf::from("/data/minecraft-bedrock/profiles/imported")
        );
    }

    #[test]
    fn flatpak_uses_bundled_binaries() {
        let paths = LauncherPaths::with_data_dir(PathBuf::from("/data"), true);
        assert_eq!(
            paths.extract_bin,
            PathBuf::from("/app/bin/mcpelauncher-extract")
        );
        assert_eq!(
            paths.client_bin,
            PathBuf::from("/app/bin/mcpelauncher-client")
        );
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = LauncherPaths::with_data_dir(tmp.path().to_path_buf(), false);
        paths.ensure_dirs().unwrap();
        paths.ensure_dirs().unwrap();
        assert!(paths.versions_dir.is_dir());
        assert!(paths.shortcuts_dir.is_dir());
    }
}

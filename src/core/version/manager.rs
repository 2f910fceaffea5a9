use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::model::Version;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::LauncherPaths;

/// Manages the lifecycle of installed versions on disk.
pub struct VersionManager {
    versions_dir: PathBuf,
    profiles_dir: PathBuf,
}

impl VersionManager {
    pub fn new(paths: &LauncherPaths) -> Self {
        Self {
            versions_dir: paths.versions_dir.clone(),
            profiles_dir: paths.profiles_dir.clone(),
        }
    }

    pub fn versions_dir(&self) -> &Path {
        &self.versions_dir
    }

    pub fn exists(&self, name: &str) -> bool {
        self.versions_dir.join(name).is_dir()
    }

    /// List all installed versions, sorted by name. Every directory under
    /// `versions/` counts as a version; stray files are ignored.
    pub async fn list(&self) -> LauncherResult<Vec<Version>> {
        let mut versions = Vec::new();

        if !self.versions_dir.exists() {
            return Ok(versions);
        }

        let mut entries =
            tokio::fs::read_dir(&self.versions_dir)
                .await
                .map_err(|source| LauncherError::Io {
                    path: self.versions_dir.clone(),
                    source,
                })?;

        while let Some(entry) = entries.next_entry().await.map_err(|source| LauncherError::Io {
            path: self.versions_dir.clone(),
            source,
        })? {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
                warn!("Skipping version directory with non-UTF-8 name: {:?}", path);
                continue;
            };
            versions.push(self.version_from_dir(&name, path).await);
        }

        versions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(versions)
    }

    /// Resolve a version by name, or by full path for entries that live
    /// outside the standard tree.
    pub async fn resolve(&self, name_or_path: &str) -> LauncherResult<Version> {
        if name_or_path.is_empty() {
            return Err(LauncherError::MissingInput("version name"));
        }

        let path = if name_or_path.contains(std::path::MAIN_SEPARATOR) {
            PathBuf::from(name_or_path)
        } else {
            self.versions_dir.join(name_or_path)
        };

        if !path.is_dir() {
            return Err(LauncherError::VersionNotFound(name_or_path.to_string()));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LauncherError::VersionNotFound(name_or_path.to_string()))?
            .to_string();

        Ok(self.version_from_dir(&name, path).await)
    }

    /// Delete a version directory, and its profile directory when
    /// `delete_profile` is set.
    pub async fn delete(&self, name_or_path: &str, delete_profile: bool) -> LauncherResult<()> {
        let version = self.resolve(name_or_path).await?;

        tokio::fs::remove_dir_all(&version.path)
            .await
            .map_err(|source| LauncherError::Io {
                path: version.path.clone(),
                source,
            })?;
        info!("Deleted version {} at {:?}", version.name, version.path);

        if delete_profile && version.profile_path.exists() {
            tokio::fs::remove_dir_all(&version.profile_path)
                .await
                .map_err(|source| LauncherError::Io {
                    path: version.profile_path.clone(),
                    source,
                })?;
            info!("Deleted profile at {:?}", version.profile_path);
        }

        Ok(())
    }

    async fn version_from_dir(&self, name: &str, path: PathBuf) -> Version {
        let installed_at = tokio::fs::metadata(&path)
            .await
            .ok()
            .and_then(|meta| meta.created().or_else(|_| meta.modified()).ok())
            .map(DateTime::<Utc>::from);

        Version {
            name: name.to_string(),
            profile_path: self.profiles_dir.join(name),
            path,
            installed_at,
        }
    }
}

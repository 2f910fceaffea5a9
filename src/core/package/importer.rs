// ─── Package Import ───
// Unpacks pack/world archives into a version's directory tree.

use std::path::{Path, PathBuf};

use tracing::info;

use super::inspector::{inspect, PackageType};
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::version::Version;

/// Unpack an archive into the matching subtree of a version:
/// `resource_packs/`, `behavior_packs/` or `worlds/`, under a directory
/// named after the package.
pub fn import_package(archive: &Path, version: &Version) -> LauncherResult<(PackageType, PathBuf)> {
    let metadata = inspect(archive)?;

    let root = match metadata.package_type {
        PackageType::ResourcePack => version.resource_packs_dir(),
        PackageType::BehaviorPack => version.behavior_packs_dir(),
        PackageType::World => version.worlds_dir(),
        PackageType::Unknown => {
            return Err(LauncherError::UnsupportedPackage(archive.to_path_buf()))
        }
    };

    let dest = root.join(sanitize_dir_name(&metadata.name));
    extract_archive(archive, &dest)?;

    info!(
        "Imported {} '{}' into {:?}",
        metadata.package_type, metadata.name, dest
    );
    Ok((metadata.package_type, dest))
}

/// Names of the directories directly under `dir`; empty when it's missing.
pub fn list_subdirs(dir: &Path) -> LauncherResult<Vec<String>> {
    let mut names = Vec::new();
    if !dir.exists() {
        return Ok(names);
    }

    for entry in std::fs::read_dir(dir).map_err(|source| LauncherError::Io {
        path: dir.to_path_buf(),
        source,
    })? {
        let entry = entry.map_err(|source| LauncherError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    names.sort();
    Ok(names)
}

fn extract_archive(archive_path: &Path, dest: &Path) -> LauncherResult<()> {
    let file = std::fs::File::open(archive_path).map_err(|source| LauncherError::Io {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(file)?;

    std::fs::create_dir_all(dest).map_err(|source| LauncherError::Io {
        path: dest.to_path_buf(),
        source,
    })?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(LauncherError::UnsafeArchivePath(entry.name().to_string()));
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&target).map_err(|source| LauncherError::Io {
                path: target.clone(),
                source,
            })?;
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|source| LauncherError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let mut out = std::fs::File::create(&target).map_err(|source| LauncherError::Io {
            path: target.clone(),
            source,
        })?;
        std::io::copy(&mut entry, &mut out).map_err(|source| LauncherError::Io {
            path: target.clone(),
            source,
        })?;
    }

    Ok(())
}

/// Keep package names filesystem-safe when they become directory names.
fn sanitize_dir_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|ch| if matches!(ch, '/' | '\\' | '\0') { '_' } else { ch })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "package".to_string()
    } else {
        trimmed.to_string()
    }
}

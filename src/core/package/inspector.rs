// ─── Package Inspection ───
// Classifies .mcpack/.mcworld/.zip archives by their embedded manifest.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LauncherError, LauncherResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    ResourcePack,
    BehaviorPack,
    World,
    Unknown,
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageType::ResourcePack => write!(f, "resource pack"),
            PackageType::BehaviorPack => write!(f, "behavior pack"),
            PackageType::World => write!(f, "world"),
            PackageType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Summary extracted from a package's `manifest.json`.
#[derive(Debug, Clone, Serialize)]
pub struct PackageMetadata {
    pub package_type: PackageType,
    pub name: String,
    pub uuid: Option<String>,
    pub version: String,
    pub description: Option<String>,
}

/// Bedrock pack manifest. Current packs nest identity under `header`;
/// very old ones keep `name`/`uuid` at the top level, worlds carry
/// `format_version`/`level_name` instead.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    header: Option<ManifestHeader>,
    #[serde(default)]
    modules: Vec<ManifestModule>,
    format_version: Option<serde_json::Value>,
    level_name: Option<String>,
    name: Option<String>,
    uuid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestHeader {
    name: Option<String>,
    uuid: Option<String>,
    version: Option<Vec<i64>>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ManifestModule {
    #[serde(rename = "type")]
    module_type: Option<String>,
}

pub fn is_package_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ext.eq_ignore_ascii_case("zip")
                || ext.eq_ignore_ascii_case("mcpack")
                || ext.eq_ignore_ascii_case("mcworld")
        })
}

/// Inspect an archive and return its classification and metadata.
///
/// An archive without a readable manifest classifies as `Unknown` with the
/// file stem as its name; only unreadable files and unrecognized extensions
/// are errors.
pub fn inspect(path: &Path) -> LauncherResult<PackageMetadata> {
    if !is_package_archive(path) {
        return Err(LauncherError::UnsupportedPackage(path.to_path_buf()));
    }

    let manifest = read_manifest(path)?;
    let fallback_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    let Some(manifest) = manifest else {
        return Ok(PackageMetadata {
            package_type: PackageType::Unknown,
            name: fallback_name,
            uuid: None,
            version: "1.0.0".to_string(),
            description: None,
        });
    };

    let header = manifest.header.as_ref();
    let name = header
        .and_then(|h| h.name.clone())
        .or_else(|| manifest.name.clone())
        .or_else(|| manifest.level_name.clone())
        .unwrap_or(fallback_name);
    let uuid = header
        .and_then(|h| h.uuid.clone())
        .or_else(|| manifest.uuid.clone());
    let version = header
        .and_then(|h| h.version.as_ref())
        .filter(|v| v.len() >= 3)
        .map(|v| format!("{}.{}.{}", v[0], v[1], v[2]))
        .unwrap_or_else(|| "1.0.0".to_string());
    let description = header.and_then(|h| h.description.clone());

    Ok(PackageMetadata {
        package_type: classify(&manifest),
        name,
        uuid,
        version,
        description,
    })
}

fn classify(manifest: &Manifest) -> PackageType {
    let has_module = |kind: &str| {
        manifest
            .modules
            .iter()
            .any(|m| m.module_type.as_deref() == Some(kind))
    };

    if has_module("resources") {
        PackageType::ResourcePack
    } else if has_module("data") {
        PackageType::BehaviorPack
    } else if manifest.format_version.is_some() || manifest.level_name.is_some() {
        PackageType::World
    } else {
        PackageType::Unknown
    }
}

/// Locate and parse `manifest.json` anywhere inside the archive.
fn read_manifest(path: &Path) -> LauncherResult<Option<Manifest>> {
    let file = std::fs::File::open(path).map_err(|source| LauncherError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(file)?;

    let manifest_entry = archive
        .file_names()
        .find(|name| {
            name.eq_ignore_ascii_case("manifest.json") || name.ends_with("/manifest.json")
        })
        .map(str::to_string);

    let Some(entry_name) = manifest_entry else {
        return Ok(None);
    };

    let mut raw = String::new();
    archive
        .by_name(&entry_name)?
        .read_to_string(&mut raw)
        .map_err(|source| LauncherError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    // A malformed manifest downgrades to Unknown rather than failing the
    // whole inspection.
    Ok(serde_json::from_str(&raw).ok())
}

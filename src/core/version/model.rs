use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// An installed version: a named directory of extracted game assets.
///
/// There is no metadata file; the directory itself is the registration.
/// The profile directory holds the per-version save data and is keyed by
/// the version name.
#[derive(Debug, Clone, Serialize)]
pub struct Version {
    pub name: String,
    pub path: PathBuf,
    pub profile_path: PathBuf,
    pub installed_at: Option<DateTime<Utc>>,
}

impl Version {
    /// Install date in the short form shown in version lists.
    pub fn install_date(&self) -> String {
        self.installed_at
            .map(|date| date.format("%d/%m/%y").to_string())
            .unwrap_or_default()
    }

    /// Worlds stored inside this version's directory.
    pub fn worlds_dir(&self) -> PathBuf {
        self.path.join("worlds")
    }

    pub fn resource_packs_dir(&self) -> PathBuf {
        self.path.join("resource_packs")
    }

    pub fn behavior_packs_dir(&self) -> PathBuf {
        self.path.join("behavior_packs")
    }
}

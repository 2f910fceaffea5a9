use reqwest::Client;

use crate::core::config::LauncherConfig;
use crate::core::error::LauncherResult;
use crate::core::extract::ApkExtractor;
use crate::core::paths::LauncherPaths;
use crate::core::version::VersionManager;

/// Everything a command handler needs, wired up once at startup.
pub struct AppState {
    pub paths: LauncherPaths,
    pub config: LauncherConfig,
    pub versions: VersionManager,
    pub extractor: ApkExtractor,
    pub http_client: Client,
}

impl AppState {
    pub fn new() -> LauncherResult<Self> {
        let paths = LauncherPaths::resolve();
        Self::with_paths(paths)
    }

    pub fn with_paths(paths: LauncherPaths) -> LauncherResult<Self> {
        paths.ensure_dirs()?;
        // Missing backends are a warning only; commands still try.
        paths.probe_backend();

        let config = LauncherConfig::load(&paths.config_file);
        let versions = VersionManager::new(&paths);
        let extractor = ApkExtractor::new(&paths);

        let http_client = Client::builder()
            .user_agent(concat!("bedrock-launcher/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            paths,
            config,
            versions,
            extractor,
            http_client,
        })
    }

    pub fn save_config(&self) -> LauncherResult<()> {
        self.config.save(&self.paths.config_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_builds_the_directory_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = LauncherPaths::with_data_dir(tmp.path().to_path_buf(), false);
        let state = AppState::with_paths(paths).unwrap();

        assert!(state.paths.versions_dir.is_dir());
        assert!(state.paths.profiles_dir.is_dir());
        assert!(state.versions.list().await.unwrap().is_empty());
    }

    #[test]
    fn config_changes_persist_through_save() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = LauncherPaths::with_data_dir(tmp.path().to_path_buf(), false);
        let mut state = AppState::with_paths(paths.clone()).unwrap();

        state.config.last_version = Some("1.20.1".into());
        state.save_config().unwrap();

        let reloaded = AppState::with_paths(paths).unwrap();
        assert_eq!(reloaded.config.last_version.as_deref(), Some("1.20.1"));
    }
}

// ─── Command Handlers ───
// One async handler per CLI subcommand, all working through AppState.

use std::path::Path;

use tracing::info;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::{compose, spawn_detached, LaunchOptions};
use crate::core::package::{import_package, inspect, list_subdirs};
use crate::core::remote;
use crate::core::shortcut::write_shortcut;
use crate::core::state::AppState;
use crate::core::version::Version;

pub async fn install(state: &AppState, apk: &Path, name: &str) -> LauncherResult<()> {
    if state.versions.exists(name) {
        info!("Version '{}' already exists; reinstalling over it", name);
    }
    let target = state.extractor.extract(apk, name).await?;
    println!("Installed version '{}' at {}", name, target.display());
    Ok(())
}

pub async fn list(state: &AppState, json: bool) -> LauncherResult<()> {
    let versions = state.versions.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&versions)?);
        return Ok(());
    }

    if versions.is_empty() {
        println!("No versions installed.");
        return Ok(());
    }

    let last = state.config.last_version.as_deref();
    for version in &versions {
        let marker = if last == Some(version.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:<16} installed {}",
            marker,
            version.name,
            version.install_date()
        );
    }
    Ok(())
}

pub async fn delete(state: &AppState, name: &str, keep_profile: bool) -> LauncherResult<()> {
    state.versions.delete(name, !keep_profile).await?;
    println!("Deleted version '{name}'");
    if keep_profile {
        println!("Profile directory kept.");
    }
    Ok(())
}

pub async fn launch(
    state: &mut AppState,
    name: &str,
    import_file: Option<&Path>,
    options: LaunchOptions,
) -> LauncherResult<()> {
    let version = state.versions.resolve(name).await?;

    if let Some(file) = import_file {
        if !file.is_file() {
            return Err(LauncherError::Io {
                path: file.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "import file not found"),
            });
        }
    }

    prepare_profile(&version, &options)?;

    let command = compose(&state.paths.client_bin, &version, import_file, &options);
    let pid = spawn_detached(&command)?;
    println!("Launched {} (pid {})", version.name, pid);

    state.config.last_version = Some(version.name);
    state.save_config()?;
    Ok(())
}

/// Create the profile directory ahead of the client so first launches don't
/// race its own mkdir. Shared mode uses the client default and needs nothing.
fn prepare_profile(version: &Version, options: &LaunchOptions) -> LauncherResult<()> {
    if options.shared_profile {
        return Ok(());
    }
    std::fs::create_dir_all(&version.profile_path).map_err(|source| LauncherError::Io {
        path: version.profile_path.clone(),
        source,
    })
}

pub async fn add_package(state: &AppState, name: &str, file: &Path) -> LauncherResult<()> {
    let version = state.versions.resolve(name).await?;
    let (package_type, dest) = import_package(file, &version)?;
    println!("Added {} to {}", package_type, dest.display());
    Ok(())
}

pub async fn inspect_package(file: &Path) -> LauncherResult<()> {
    let metadata = inspect(file)?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}

pub async fn shortcut(
    state: &AppState,
    name: &str,
    options: LaunchOptions,
    icon: Option<&Path>,
) -> LauncherResult<()> {
    let version = state.versions.resolve(name).await?;
    prepare_profile(&version, &options)?;
    let dest = write_shortcut(&state.paths, &version, &options, icon)?;
    println!("Shortcut written to {}", dest.display());
    Ok(())
}

pub async fn available(state: &AppState) -> LauncherResult<()> {
    let versions = remote::fetch_available(&state.http_client).await?;
    if versions.is_empty() {
        println!("No published versions found.");
        return Ok(());
    }
    for version in versions {
        println!("{version}");
    }
    Ok(())
}

pub fn show_config(state: &AppState) -> LauncherResult<()> {
    println!("{}", serde_json::to_string_pretty(&state.config)?);
    Ok(())
}

pub fn set_config(
    state: &mut AppState,
    theme: Option<String>,
    language: Option<String>,
    scale: Option<f64>,
) -> LauncherResult<()> {
    if theme.is_none() && language.is_none() && scale.is_none() {
        return Err(LauncherError::MissingInput(
            "at least one of --theme, --language, --scale",
        ));
    }

    if let Some(theme) = theme {
        state.config.theme = theme;
    }
    if let Some(language) = language {
        state.config.language = language;
    }
    if let Some(scale) = scale {
        state.config.scale = scale;
    }

    state.save_config()?;
    info!("Config updated at {:?}", state.paths.config_file);
    show_config(state)
}

pub async fn doctor(state: &AppState) -> LauncherResult<()> {
    let status = state.paths.probe_backend();

    println!("Data dir:       {}", state.paths.data_dir.display());
    println!("Launcher dir:   {}", state.paths.launcher_dir.display());
    println!("Flatpak:        {}", state.paths.is_flatpak);
    match &status.extractor {
        Some(path) => println!("Extractor:      {}", path.display()),
        None => println!("Extractor:      MISSING ({:?})", state.paths.extract_bin),
    }
    match &status.client {
        Some(path) => println!("Client:         {}", path.display()),
        None => println!("Client:         MISSING ({:?})", state.paths.client_bin),
    }

    let versions = state.versions.list().await?;
    println!("Versions:       {}", versions.len());
    for version in &versions {
        let worlds = list_subdirs(&version.worlds_dir())?;
        let resources = list_subdirs(&version.resource_packs_dir())?;
        let behaviors = list_subdirs(&version.behavior_packs_dir())?;
        println!(
            "  {:<16} {} world(s), {} resource pack(s), {} behavior pack(s)",
            version.name,
            worlds.len(),
            resources.len(),
            behaviors.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::LauncherPaths;

    fn state_in(tmp: &tempfile::TempDir) -> AppState {
        let paths = LauncherPaths::with_data_dir(tmp.path().to_path_buf(), false);
        AppState::with_paths(paths).unwrap()
    }

    #[tokio::test]
    async fn delete_honors_keep_profile() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(&tmp);
        std::fs::create_dir(state.paths.versions_dir.join("1.20.1")).unwrap();
        std::fs::create_dir(state.paths.profiles_dir.join("1.20.1")).unwrap();

        delete(&state, "1.20.1", true).await.unwrap();
        assert!(!state.paths.versions_dir.join("1.20.1").exists());
        assert!(state.paths.profiles_dir.join("1.20.1").exists());
    }

    #[tokio::test]
    async fn launch_of_unknown_version_fails_cleanly() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = state_in(&tmp);
        let err = launch(&mut state, "nope", None, LaunchOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LauncherError::VersionNotFound(_)));
        assert!(state.config.last_version.is_none());
    }

    #[tokio::test]
    async fn import_with_missing_file_fails_before_spawn() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = state_in(&tmp);
        std::fs::create_dir(state.paths.versions_dir.join("1.20.1")).unwrap();

        let err = launch(
            &mut state,
            "1.20.1",
            Some(Path::new("/nonexistent/pack.mcpack")),
            LaunchOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, LauncherError::Io { .. }));
    }

    #[test]
    fn prepare_profile_creates_directory_unless_shared() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(&tmp);
        let version = Version {
            name: "1.20.1".into(),
            path: state.paths.versions_dir.join("1.20.1"),
            profile_path: state.paths.profile_dir("1.20.1"),
            installed_at: None,
        };

        prepare_profile(&version, &LaunchOptions::default()).unwrap();
        assert!(version.profile_path.is_dir());

        let shared_version = Version {
            name: "beta".into(),
            path: state.paths.versions_dir.join("beta"),
            profile_path: state.paths.profile_dir("beta"),
            installed_at: None,
        };
        let shared = LaunchOptions {
            shared_profile: true,
            ..Default::default()
        };
        prepare_profile(&shared_version, &shared).unwrap();
        assert!(!shared_version.profile_path.exists());
    }

    #[test]
    fn set_config_requires_a_field() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = state_in(&tmp);
        let err = set_config(&mut state, None, None, None).unwrap_err();
        assert!(matches!(err, LauncherError::MissingInput(_)));
    }

    #[test]
    fn set_config_persists() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = state_in(&tmp);
        set_config(&mut state, Some("LIGHT".into()), None, Some(1.25)).unwrap();

        let reloaded = state_in(&tmp);
        assert_eq!(reloaded.config.theme, "LIGHT");
        assert_eq!(reloaded.config.scale, 1.25);
        assert_eq!(reloaded.config.language, "EN");
    }
}

// ─── Desktop Shortcuts ───
// Writes freedesktop .desktop entries that replay a composed launch.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::{client_args, client_env, LaunchOptions};
use crate::core::paths::LauncherPaths;
use crate::core::version::Version;

/// Write a `.desktop` file for a version under `shortcuts/`.
///
/// The entry name carries a tag for the options baked into it: `N` for
/// NVIDIA offload, `Z` for Zink, `C` for the shared data directory. The
/// Exec line inlines the environment through `env(1)` so the same
/// renderer/offload exclusivity applies when the shortcut runs.
pub fn write_shortcut(
    paths: &LauncherPaths,
    version: &Version,
    options: &LaunchOptions,
    icon: Option<&Path>,
) -> LauncherResult<PathBuf> {
    let display_name = tagged_name(&version.name, options);
    let exec = exec_line(&paths.client_bin, version, options);
    let icon = icon
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths.launcher_dir.join("logo.png"));

    let entry = format!(
        "[Desktop Entry]\n\
         Version=1.0\n\
         Type=Application\n\
         Name={display_name}\n\
         Comment=Minecraft Bedrock ({name})\n\
         Exec={exec}\n\
         Icon={icon}\n\
         Terminal=false\n\
         Categories=Game;\n\
         StartupNotify=true\n",
        name = version.name,
        icon = icon.display(),
    );

    let dest = paths.shortcuts_dir.join(format!("{display_name}.desktop"));
    std::fs::write(&dest, entry).map_err(|source| LauncherError::Io {
        path: dest.clone(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o755)).map_err(
            |source| LauncherError::Io {
                path: dest.clone(),
                source,
            },
        )?;
    }

    info!("Shortcut written to {:?}", dest);
    Ok(dest)
}

/// `[NZC]`-style tag reflecting the options that will actually apply.
fn tagged_name(name: &str, options: &LaunchOptions) -> String {
    let mut tag = String::new();
    if options.zink {
        tag.push('Z');
    } else if options.nvidia_offload {
        tag.push('N');
    }
    if options.shared_profile {
        tag.push('C');
    }

    if tag.is_empty() {
        name.to_string()
    } else {
        format!("[{tag}] {name}")
    }
}

fn exec_line(client: &Path, version: &Version, options: &LaunchOptions) -> String {
    let mut parts = Vec::new();

    let env = client_env(options);
    if !env.is_empty() {
        parts.push("env".to_string());
        for (key, value) in env {
            parts.push(format!("{key}={value}"));
        }
    }

    parts.push(quote(&client.to_string_lossy()));
    for arg in client_args(version, None, options) {
        parts.push(quote(&arg));
    }

    parts.join(" ")
}

/// Minimal Exec-line quoting: plain tokens pass through, anything else is
/// double-quoted with inner quotes escaped.
fn quote(raw: &str) -> String {
    if !raw.is_empty()
        && raw
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '='))
    {
        return raw.to_string();
    }
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

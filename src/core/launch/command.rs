// ─── Launch Composition ───
// Builds the argument vector and environment for mcpelauncher-client.

use std::path::Path;

use crate::core::version::Version;

/// Per-launch toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchOptions {
    /// NVIDIA PRIME render offload for hybrid-GPU laptops.
    pub nvidia_offload: bool,
    /// Force the Zink (GL-on-Vulkan) Mesa driver.
    pub zink: bool,
    /// Skip per-version profile isolation; the client falls back to its own
    /// default data directory, shared by every version launched this way.
    pub shared_profile: bool,
    /// Wrap the client in the MangoHud performance overlay.
    pub mangohud: bool,
}

/// A fully composed invocation, ready to spawn or to serialize into a
/// shortcut's Exec line.
#[derive(Debug, Clone)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(&'static str, &'static str)>,
}

const ZINK_ENV: [(&str, &str); 1] = [("MESA_LOADER_DRIVER_OVERRIDE", "zink")];

const NVIDIA_ENV: [(&str, &str); 3] = [
    ("__NV_PRIME_RENDER_OFFLOAD", "1"),
    ("__VK_LAYER_NV_optimus", "NVIDIA_only"),
    ("__GLX_VENDOR_LIBRARY_NAME", "nvidia"),
];

/// Client argument vector: `-dg <version dir> [-dd <profile dir>] [-ifp <file>]`.
///
/// Shared mode omits `-dd` entirely and defers to the client's default data
/// directory.
pub fn client_args(
    version: &Version,
    import_file: Option<&Path>,
    options: &LaunchOptions,
) -> Vec<String> {
    let mut args = vec![
        "-dg".to_string(),
        version.path.to_string_lossy().to_string(),
    ];
    if !options.shared_profile {
        args.push("-dd".to_string());
        args.push(version.profile_path.to_string_lossy().to_string());
    }
    if let Some(file) = import_file {
        args.push("-ifp".to_string());
        args.push(file.to_string_lossy().to_string());
    }
    args
}

/// Environment for the child process. The Zink driver override and the
/// NVIDIA offload set are mutually exclusive; Zink wins when both are
/// requested, since layering offload variables under a forced software
/// driver breaks the client's context creation.
pub fn client_env(options: &LaunchOptions) -> Vec<(&'static str, &'static str)> {
    if options.zink {
        ZINK_ENV.to_vec()
    } else if options.nvidia_offload {
        NVIDIA_ENV.to_vec()
    } else {
        Vec::new()
    }
}

/// Compose the full invocation. MangoHud acts as the wrapper when requested;
/// otherwise `setsid` detaches the client from the launcher's session.
pub fn compose(
    client: &Path,
    version: &Version,
    import_file: Option<&Path>,
    options: &LaunchOptions,
) -> LaunchCommand {
    let mut args = vec![client.to_string_lossy().to_string()];
    args.extend(client_args(version, import_file, options));

    let program = if options.mangohud { "mangohud" } else { "setsid" };

    LaunchCommand {
        program: program.to_string(),
        args,
        env: client_env(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn version() -> Version {
        Version {
            name: "1.20.1".into(),
            path: PathBuf::from("/data/minecraft-bedrock/versions/1.20.1"),
            profile_path: PathBuf::from("/data/minecraft-bedrock/profiles/1.20.1"),
            installed_at: None,
        }
    }

    #[test]
    fn default_launch_isolates_profile() {
        let args = client_args(&version(), None, &LaunchOptions::default());
        assert_eq!(
            args,
            [
                "-dg",
                "/data/minecraft-bedrock/versions/1.20.1",
                "-dd",
                "/data/minecraft-bedrock/profiles/1.20.1",
            ]
        );
    }

    #[test]
    fn shared_mode_omits_profile_flag() {
        let options = LaunchOptions {
            shared_profile: true,
            ..Default::default()
        };
        let args = client_args(&version(), None, &options);
        assert!(!args.contains(&"-dd".to_string()));
        assert_eq!(args, ["-dg", "/data/minecraft-bedrock/versions/1.20.1"]);
    }

    #[test]
    fn import_appends_ifp() {
        let args = client_args(
            &version(),
            Some(Path::new("/tmp/addon.mcpack")),
            &LaunchOptions::default(),
        );
        assert_eq!(&args[args.len() - 2..], ["-ifp", "/tmp/addon.mcpack"]);
    }

    #[test]
    fn zink_overrides_nvidia_offload() {
        let options = LaunchOptions {
            nvidia_offload: true,
            zink: true,
            ..Default::default()
        };
        let env = client_env(&options);
        assert_eq!(env, [("MESA_LOADER_DRIVER_OVERRIDE", "zink")]);
    }

    #[test]
    fn nvidia_offload_alone_sets_prime_variables() {
        let options = LaunchOptions {
            nvidia_offload: true,
            ..Default::default()
        };
        let env = client_env(&options);
        assert_eq!(env.len(), 3);
        assert!(env.contains(&("__NV_PRIME_RENDER_OFFLOAD", "1")));
        assert!(env.contains(&("__GLX_VENDOR_LIBRARY_NAME", "nvidia")));
    }

    #[test]
    fn no_gpu_toggles_means_clean_env() {
        assert!(client_env(&LaunchOptions::default()).is_empty());
    }

    #[test]
    fn setsid_is_the_default_wrapper() {
        let cmd = compose(
            Path::new("mcpelauncher-client"),
            &version(),
            None,
            &LaunchOptions::default(),
        );
        assert_eq!(cmd.program, "setsid");
        assert_eq!(cmd.args[0], "mcpelauncher-client");
    }

    #[test]
    fn mangohud_replaces_setsid() {
        let options = LaunchOptions {
            mangohud: true,
            ..Default::default()
        };
        let cmd = compose(Path::new("mcpelauncher-client"), &version(), None, &options);
        assert_eq!(cmd.program, "mangohud");
        assert_eq!(cmd.args[0], "mcpelauncher-client");
    }
}

// ─── Command Line ───

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::launch::LaunchOptions;

#[derive(Parser)]
#[command(
    name = "bedrock-launcher",
    version,
    about = "Manage and launch Minecraft Bedrock versions via the mcpelauncher toolchain"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install an APK as a named version
    Install {
        /// Path to the Bedrock APK
        apk: PathBuf,
        /// Name for the new version, e.g. "1.20.1"
        name: String,
    },
    /// List installed versions
    List {
        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete an installed version
    Delete {
        /// Version name, or a path for versions outside the standard tree
        name: String,
        /// Keep the version's profile directory (saves, settings)
        #[arg(long)]
        keep_profile: bool,
    },
    /// Launch a version
    Launch {
        /// Version name, or a path for versions outside the standard tree
        name: String,
        #[command(flatten)]
        flags: LaunchFlags,
    },
    /// Launch a version and hand it a pack/world file to import
    Import {
        /// Version name
        name: String,
        /// .mcpack/.mcworld file for the client to import
        file: PathBuf,
        #[command(flatten)]
        flags: LaunchFlags,
    },
    /// Unpack a pack/world archive directly into a version's directories
    Add {
        /// Version name
        name: String,
        /// .mcpack/.mcworld/.zip archive
        file: PathBuf,
    },
    /// Show what a pack/world archive contains without importing it
    Inspect {
        /// .mcpack/.mcworld/.zip archive
        file: PathBuf,
    },
    /// Write a desktop shortcut that launches a version
    Shortcut {
        /// Version name
        name: String,
        #[command(flatten)]
        flags: LaunchFlags,
        /// Icon for the shortcut; defaults to the launcher logo
        #[arg(long)]
        icon: Option<PathBuf>,
    },
    /// List versions published upstream, newest first
    Available,
    /// Show or change launcher settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Check that the backend tools and data directories are in place
    Doctor,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Update one or more settings
    Set {
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        scale: Option<f64>,
    },
}

/// GPU/profile toggles shared by launch, import and shortcut.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LaunchFlags {
    /// NVIDIA PRIME render offload (hybrid-GPU laptops)
    #[arg(long)]
    pub nvidia: bool,
    /// Force the Zink Mesa driver; overrides --nvidia
    #[arg(long)]
    pub zink: bool,
    /// Use the client's shared data directory instead of a per-version profile
    #[arg(long)]
    pub shared: bool,
    /// Wrap the client in the MangoHud overlay (ignored by shortcuts)
    #[arg(long)]
    pub mangohud: bool,
}

impl From<LaunchFlags> for LaunchOptions {
    fn from(flags: LaunchFlags) -> Self {
        Self {
            nvidia_offload: flags.nvidia,
            zink: flags.zink,
            shared_profile: flags.shared,
            mangohud: flags.mangohud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn launch_flags_parse() {
        let cli = Cli::parse_from(["bedrock-launcher", "launch", "1.20.1", "--zink", "--shared"]);
        let Command::Launch { name, flags } = cli.command else {
            panic!("expected launch");
        };
        assert_eq!(name, "1.20.1");
        assert!(flags.zink);
        assert!(flags.shared);
        assert!(!flags.nvidia);

        let options = LaunchOptions::from(flags);
        assert!(options.zink);
        assert!(options.shared_profile);
    }

    #[test]
    fn delete_keeps_profile_by_default() {
        let cli = Cli::parse_from(["bedrock-launcher", "delete", "1.20.1"]);
        let Command::Delete { keep_profile, .. } = cli.command else {
            panic!("expected delete");
        };
        assert!(!keep_profile);
    }
}

// ─── Launcher Core ───
// Backend for a Minecraft Bedrock version launcher built on the
// mcpelauncher toolchain.
//
// Architecture:
//   core/
//     paths/    — data dir resolution + fixed directory tree
//     version/  — installed version model + lifecycle manager
//     extract/  — mcpelauncher-extract wrapper (APK → version)
//     launch/   — client argv/env composition + detached spawn
//     package/  — .mcpack/.mcworld inspection and import
//     shortcut/ — freedesktop .desktop generation
//     remote/   — published version catalog
//     config/   — config.json persistence
//     state/    — global application state

pub mod config;
pub mod error;
pub mod extract;
pub mod launch;
pub mod package;
pub mod paths;
pub mod remote;
pub mod shortcut;
pub mod state;
pub mod version;

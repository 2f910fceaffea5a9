// ─── Launch Task ───
// Spawns the game client as a detached child process.

use std::process::Stdio;

use tracing::{debug, info};

use super::command::LaunchCommand;
use crate::core::error::{LauncherError, LauncherResult};

/// Spawn the composed command and return immediately with the child's PID.
///
/// The child's lifetime is independent of the launcher's: `setsid` (or
/// MangoHud) reparents it into its own session and no exit status is ever
/// awaited. Only the spawn call itself can fail here.
pub fn spawn_detached(command: &LaunchCommand) -> LauncherResult<u32> {
    let mut cmd = std::process::Command::new(&command.program);
    cmd.args(&command.args);
    for (key, value) in &command.env {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::null());

    debug!("Spawning: {} {:?}", command.program, command.args);

    let child = cmd.spawn().map_err(|source| LauncherError::Spawn {
        program: command.program.clone(),
        source,
    })?;

    let pid = child.id();
    info!("Client spawned (pid {})", pid);
    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_names_the_program() {
        let command = LaunchCommand {
            program: "/nonexistent/wrapper".into(),
            args: vec![],
            env: vec![],
        };
        let err = spawn_detached(&command).unwrap_err();
        match err {
            LauncherError::Spawn { program, .. } => {
                assert_eq!(program, "/nonexistent/wrapper");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn spawn_returns_without_waiting() {
        // "sleep 5" would block for seconds if the spawn awaited the child.
        let command = LaunchCommand {
            program: "sleep".into(),
            args: vec!["5".into()],
            env: vec![],
        };
        let started = std::time::Instant::now();
        let pid = spawn_detached(&command).unwrap();
        assert!(pid > 0);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}

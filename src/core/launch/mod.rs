mod command;
mod task;

pub use command::{client_args, client_env, compose, LaunchCommand, LaunchOptions};
pub use task::spawn_detached;

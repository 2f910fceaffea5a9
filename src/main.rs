use clap::Parser;
use tracing_subscriber::EnvFilter;

use bedrock_launcher::cli::{Cli, Command, ConfigAction};
use bedrock_launcher::commands;
use bedrock_launcher::core::error::LauncherResult;
use bedrock_launcher::core::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bedrock_launcher=debug")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> LauncherResult<()> {
    let cli = Cli::parse();
    let mut state = AppState::new()?;

    match cli.command {
        Command::Install { apk, name } => commands::install(&state, &apk, &name).await,
        Command::List { json } => commands::list(&state, json).await,
        Command::Delete { name, keep_profile } => {
            commands::delete(&state, &name, keep_profile).await
        }
        Command::Launch { name, flags } => {
            commands::launch(&mut state, &name, None, flags.into()).await
        }
        Command::Import { name, file, flags } => {
            commands::launch(&mut state, &name, Some(&file), flags.into()).await
        }
        Command::Add { name, file } => commands::add_package(&state, &name, &file).await,
        Command::Inspect { file } => commands::inspect_package(&file).await,
        Command::Shortcut { name, flags, icon } => {
            commands::shortcut(&state, &name, flags.into(), icon.as_deref()).await
        }
        Command::Available => commands::available(&state).await,
        Command::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&state),
            ConfigAction::Set {
                theme,
                language,
                scale,
            } => commands::set_config(&mut state, theme, language, scale),
        },
        Command::Doctor => commands::doctor(&state).await,
    }
}

//! LingoLens CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lingo_lens::cli::{
    app::{load_merged_config, models_from_config, run_analyze, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{AnalyzeOptions, Cli, Commands},
    config_cmd::handle_config_command,
    history_cmd::handle_history_command,
    presenter::Presenter,
};
use lingo_lens::domain::config::AppConfig;
use lingo_lens::domain::translation::SupportedLanguage;
use lingo_lens::infrastructure::{FileStore, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::History { action }) => {
            if let Err(e) = handle_history_command(action, FileStore::new(), &presenter) {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Languages) => {
            presenter.languages();
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        target_language: cli.target.clone(),
        speak: cli.speak.then_some(true),
        clipboard: cli.clipboard.then_some(true),
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;

    let target = match config
        .target_language
        .as_deref()
        .map(str::parse::<SupportedLanguage>)
        .transpose()
    {
        Ok(target) => target.unwrap_or_default(),
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = AnalyzeOptions {
        text: cli.text,
        audio: cli.audio,
        target,
        speak: config.speak_or_default(),
        clipboard: config.clipboard_or_default(),
        json: cli.json,
        models: models_from_config(&config),
    };

    run_analyze(options, config.api_key).await
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "lingo_lens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

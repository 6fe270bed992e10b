//! CLI entrypoint for ctrl-build
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use reconstruct_application::{
    AnonymousSessions, BehaviorConfig, HistoryStore, LlmGateway, NoHistoryStore, NoStatsStore,
    ReconstructUseCase, RestoreHistoryUseCase, SessionResolver, StatsStore,
    SubmitRefinementUseCase, UserStatsUseCase, WordsRefinedCounter,
};
use reconstruct_domain::core::string::char_len;
use reconstruct_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, HttpRefinementApi, Severity, SupabaseClient,
    SupabaseHistoryStore, SupabaseSessionResolver, SupabaseStatsStore,
};
use reconstruct_presentation::{
    AppState, Cli, Command, ConsoleOutput, RefineArgs, ServeArgs, Typewriter, WaitingIndicator,
    api_router, cors_layer,
};
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // The server logs its request lifecycle by default; the client stays quiet
    let default_level = match command {
        Command::Serve(_) => "info",
        _ => "warn",
    };
    let _log_guard = init_logging(cli.verbose, default_level, config.logging.directory.as_deref())?;

    match command {
        Command::Serve(args) => serve(config, args).await.map(|()| ExitCode::SUCCESS),
        Command::Refine(args) => refine(config, args).await,
        Command::Modes => {
            println!("{}", ConsoleOutput::modes());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_logging(
    verbose: u8,
    default_level: &str,
    directory: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ctrl-build.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}

async fn serve(mut config: FileConfig, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => bail!("Invalid configuration: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    // === Dependency Injection ===
    let model = config.model.resolve_model();
    let gateway = GeminiGateway::try_new(config.model.resolve_api_key(), &config.model.base_url)
        .map(|g| Arc::new(g) as Arc<dyn LlmGateway>);

    let (sessions, history, stats): (
        Arc<dyn SessionResolver>,
        Arc<dyn HistoryStore>,
        Arc<dyn StatsStore>,
    ) = match config.store.resolve() {
        Some((url, anon_key)) => {
            let client = SupabaseClient::new(&url, anon_key)?;
            info!(url = %url, table = %config.store.history_table, "History store enabled");
            (
                Arc::new(SupabaseSessionResolver::new(client.clone())),
                Arc::new(SupabaseHistoryStore::new(
                    client.clone(),
                    config.store.history_table.clone(),
                )),
                Arc::new(SupabaseStatsStore::new(
                    client,
                    config.store.stats_table.clone(),
                    config.store.activity_table.clone(),
                )),
            )
        }
        None => (
            Arc::new(AnonymousSessions),
            Arc::new(NoHistoryStore),
            Arc::new(NoStatsStore),
        ),
    };

    let behavior =
        BehaviorConfig::from_timeout_seconds(Some(config.model.timeout_secs)).with_model(model);
    let reconstruct = Arc::new(
        ReconstructUseCase::new(gateway)
            .with_history_store(history.clone())
            .with_words_counter(Arc::new(WordsRefinedCounter::new(
                config.stats.words_refined_seed,
            )))
            .with_behavior(behavior),
    );
    let restore = Arc::new(RestoreHistoryUseCase::new(history));

    let state = AppState::new(reconstruct.clone(), restore, sessions)
        .with_stats(Arc::new(UserStatsUseCase::new(stats)));
    let router = api_router(state).layer(cors_layer(&config.server.cors_origins));

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown requested");
                    shutdown.cancel();
                }
                Err(e) => warn!("Cannot listen for Ctrl-C: {}", e),
            }
        }
    });

    info!("Starting ctrl-build {}", env!("CARGO_PKG_VERSION"));
    reconstruct_presentation::serve(router, &config.server.bind_address(), shutdown).await?;

    // Let pending history writes finish before exiting
    reconstruct.drain_side_effects().await;
    Ok(())
}

async fn refine(config: FileConfig, args: RefineArgs) -> Result<ExitCode> {
    let text = if args.reads_stdin() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.text.clone().unwrap_or_default()
    };

    let base_url = args.server.as_deref().unwrap_or(&config.client.base_url);
    debug!(base_url, chars = char_len(&text), "Refining");

    let api = HttpRefinementApi::new(base_url)?.with_access_token(args.token.clone());
    let use_case = SubmitRefinementUseCase::new(Arc::new(api));

    let waiting = WaitingIndicator::start("Refining...");
    let result = use_case.execute(&text, Some(args.mode.as_str())).await;
    waiting.finish();

    match result {
        Ok(refined) => {
            let stdout = io::stdout();
            let instant = args.instant || config.client.instant || !stdout.is_terminal();
            let mut writer = if instant {
                Typewriter::instant(stdout)
            } else {
                Typewriter::new(stdout)
            };
            writer.type_out(&refined).await?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", ConsoleOutput::error(&e.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_refine_failure_returns_exit_code() {
        let args = RefineArgs {
            text: Some("   ".to_string()),
            mode: "Standard".to_string(),
            server: None,
            token: None,
            instant: true,
        };
        let code = refine(FileConfig::default(), args).await.unwrap();
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::FAILURE));
    }
}

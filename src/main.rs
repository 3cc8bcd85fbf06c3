//! Binary entrypoint for the grue CLI.
//!
//! Commands:
//! - `play [--world <path>]` - play a world interactively on the console
//! - `check [--world <path>]` - load and validate a world document
//! - `init` - write a starter `config.toml`
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};

use grue::adventure::{load_game_from_json, StdoutOutput};
use grue::config::Config;
use grue::console::{run_console, ConsoleOptions};

#[derive(Parser)]
#[command(name = "grue")]
#[command(about = "A turn-based text adventure engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world on the console
    Play {
        /// World document (overrides the config file)
        #[arg(short, long)]
        world: Option<String>,
    },
    /// Load a world document and report whether it is valid
    Check {
        #[arg(short, long)]
        world: Option<String>,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        init_logging(&None, cli.verbose);
        Config::create_default(&cli.config).await?;
        info!("Configuration file created at {}", cli.config);
        println!("Wrote {}", cli.config);
        return Ok(());
    }

    // A missing config file is fine; everything has a default.
    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) if std::path::Path::new(&cli.config).exists() => return Err(e),
        Err(_) => Config::default(),
    };
    init_logging(&Some(config.clone()), cli.verbose);

    match cli.command {
        Commands::Play { world } => {
            let world_file = world.unwrap_or_else(|| config.game.world_file.clone());
            info!("Starting grue v{} with {}", env!("CARGO_PKG_VERSION"), world_file);
            let document = load_game_from_json(&world_file)
                .with_context(|| format!("loading world {}", world_file))?;
            let welcome = config
                .game
                .welcome_message
                .clone()
                .or_else(|| document.welcome_message.clone());
            let farewell = config
                .game
                .exit_message
                .clone()
                .or_else(|| document.exit_message.clone());
            let mut session = document
                .into_session(StdoutOutput)
                .with_context(|| format!("building world {}", world_file))?
                .with_messages(welcome, farewell);

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_console(&mut session, stdin, &ConsoleOptions::from(&config.game)).await?;
        }
        Commands::Check { world } => {
            let world_file = world.unwrap_or_else(|| config.game.world_file.clone());
            let document = load_game_from_json(&world_file)
                .with_context(|| format!("loading world {}", world_file))?;
            let start = document.starting_location.clone();
            match document.into_session(StdoutOutput) {
                Ok(session) => println!(
                    "{}: ok ({} rooms, {} objects, starting in {})",
                    world_file,
                    session.world().room_count(),
                    session.world().object_count(),
                    start
                ),
                Err(e) => {
                    error!("world {} failed validation: {}", world_file, e);
                    println!("{}: invalid: {}", world_file, e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Init => unreachable!("handled above"),
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides config
    let base_level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Info,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .filter(|file| !file.trim().is_empty())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    match log_file {
        Some(f) => {
            let file = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Narration owns an interactive terminal; only echo logs when
            // stdout is redirected elsewhere.
            let echo = !atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = file.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if echo {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    }
    let _ = builder.try_init();
}

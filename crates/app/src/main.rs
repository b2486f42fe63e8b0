mod config;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dotenvy::dotenv;
use services::{AppServices, Clock};
use storage::Storage;
use tokio::runtime::Handle;
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

use crate::config::AppConfig;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --advance-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--advance-ms <ms>] [--no-seed]");
    eprintln!("  cargo run -p app -- list [--no-seed]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --advance-ms 1500");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GEMINI_API_KEY (or API_KEY), GEMINI_BASE_URL, GEMINI_TEXT_MODEL,");
    eprintln!("  GEMINI_SPEECH_MODEL, GEMINI_VOICE, STUDY_ADVANCE_MS, STUDY_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

struct Args {
    advance_delay: Duration,
    seed_library: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        config: &AppConfig,
    ) -> Result<Self, ArgsError> {
        let mut advance_delay = config.advance_delay;
        let mut seed_library = config.seed_library;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--advance-ms" => {
                    let value = require_value(args, "--advance-ms")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDelay { raw: value.clone() })?;
                    advance_delay = Duration::from_millis(parsed);
                }
                "--no-seed" => seed_library = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            advance_delay,
            seed_library,
        })
    }
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::new(&config.rust_log);
    let log_layer = log_fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(log_layer)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let config = AppConfig::from_env();
    init_tracing(&config);

    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter(), &config).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::default();
    let storage = if parsed.seed_library {
        Storage::seeded(clock.now())?
    } else {
        Storage::in_memory()
    };

    match cmd {
        Command::Ui => {
            let services = AppServices::new(&storage, clock, parsed.advance_delay, Handle::current());
            tracing::info!(
                advance_ms = parsed.advance_delay.as_millis(),
                ai_enabled = services.ai_enabled(),
                "launching desktop app"
            );
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Psych AI")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List => {
            for set in storage.sets.list_sets().await? {
                let unit = set.unit().map_or("-", |unit| unit.label());
                println!(
                    "{}\t{}\t{:?}\t{}\t{}",
                    set.id(),
                    set.resource_type().label(),
                    set.category(),
                    unit,
                    set.title()
                );
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // Binary glue prints once and exits.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

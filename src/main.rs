// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{info, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use glucose::app_config::{self, Config};
use glucose::blob_store::BlobStore;
use glucose::file_utils::{FileManager, FsTextReader, TextReader};
use glucose::stores::WatchProgressStore;
use glucose::subtitle_loader::{IngestResult, SubtitleLoader};
use glucose::subtitle_processor;
use glucose::time_format::{format_duration, format_time};
use glucose::version;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a subtitle file and print it as WebVTT
    Load {
        /// Subtitle file to load
        #[arg(value_name = "PATH")]
        path: String,

        /// Write the WebVTT output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the detected format of a subtitle file
    Detect {
        /// Subtitle file to inspect
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// List saved watch progress from a JSON store file
    Progress {
        /// JSON object of video path to progress
        #[arg(value_name = "STORE_JSON")]
        store: PathBuf,
    },

    /// Generate shell completions for glucose
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Glucose - video player core utilities
///
/// Loads subtitle files the way the player does (SRT is converted to WebVTT,
/// unsupported formats are reported) and inspects saved player state.
#[derive(Parser, Debug)]
#[command(name = "glucose")]
#[command(version = version::app_version())]
#[command(about = "Subtitle loading and player state utilities")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                color, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at info; the config may lower or raise it once loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "glucose", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    config.validate().map_err(|e| anyhow!("Configuration validation failed: {}", e))?;
    log::set_max_level(config.log_level.to_level_filter());
    debug!("Running glucose {}", version::formatted_version());

    match cli.command {
        Commands::Load { path, output } => run_load(&config, &path, output).await,
        Commands::Detect { path } => run_detect(&config, &path).await,
        Commands::Progress { store } => run_progress(&store),
        Commands::Completions { .. } => Ok(()),
    }
}

async fn run_load(config: &Config, path: &str, output: Option<PathBuf>) -> Result<()> {
    let blobs = Arc::new(BlobStore::new());
    let loader = SubtitleLoader::with_config(FsTextReader, Arc::clone(&blobs), config.subtitles.clone());

    let track = match loader.ingest(path).await {
        IngestResult::Success(track) => track,
        IngestResult::Failure(reason) => return Err(anyhow!(reason)),
    };

    let blob = blobs
        .get(&track.handle)
        .ok_or_else(|| anyhow!("Subtitle blob {} vanished before it was read", track.handle))?;

    match output {
        Some(output) => {
            FileManager::write_to_file(&output, &blob.content)?;
            info!("Wrote '{}' to {:?}", track.display_name, output);
        }
        None => {
            info!("Loaded '{}'", track.display_name);
            print!("{}", blob.content);
            std::io::stdout().flush()?;
        }
    }

    loader.release(&track);
    Ok(())
}

async fn run_detect(config: &Config, path: &str) -> Result<()> {
    let raw = FsTextReader
        .read_text(path)
        .await
        .map_err(|e| anyhow!("Failed to load subtitle file: {}", e))?;
    let content = subtitle_processor::normalize_content(&raw);
    let extension = subtitle_processor::file_extension(path);
    let format = subtitle_processor::detect_format_with(
        &content,
        &extension,
        &config.subtitles.unsupported_extensions,
    );

    let name = subtitle_processor::display_name_with(path, &config.subtitles.fallback_display_name);
    println!("{}: {}", name, format);
    Ok(())
}

fn run_progress(store_path: &Path) -> Result<()> {
    let json = FileManager::read_to_string(store_path)?;
    let store = WatchProgressStore::new();
    store.load_all_progress_json(&json)?;

    if store.is_empty() {
        info!("No watch progress saved in {:?}", store_path);
        return Ok(());
    }

    for progress in store.entries() {
        let duration = format_duration(Some(progress.duration));
        let duration = if duration.is_empty() { "?".to_string() } else { duration };
        println!("{}  {} / {}", progress.path, format_time(progress.current_time), duration);
    }
    Ok(())
}

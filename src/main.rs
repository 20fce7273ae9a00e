//! Spot market data CLI - main entry point
//!
//! Without a subcommand, prints the configured base URL, the top-10
//! USDT pairs by 24h volume, and the head of a sample BTCUSDT fetch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "market-data")]
#[command(about = "Spot market data fetching from the Bybit V5 API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print base URL, top-10 symbols, and a sample kline fetch
    Summary,

    /// Print the top 10 USDT pairs by 24h traded volume
    Top,

    /// Fetch klines and print the series head
    Klines {
        /// Trading pair symbol
        #[arg(short, long, default_value = "BTCUSDT")]
        symbol: String,

        /// Kline interval (e.g., "1", "5", "60", "D")
        #[arg(short, long, default_value = "1")]
        interval: String,

        /// Number of candles to fetch
        #[arg(short, long, default_value = "200")]
        limit: u32,

        /// Data source name
        #[arg(long, default_value = "bybit")]
        source: String,
    },

    /// Fetch klines and save them to CSV
    Download {
        /// Trading pair symbol
        #[arg(short, long, default_value = "BTCUSDT")]
        symbol: String,

        /// Kline interval (e.g., "1", "5", "60", "D")
        #[arg(short, long, default_value = "1")]
        interval: String,

        /// Number of candles to fetch
        #[arg(short, long, default_value = "200")]
        limit: u32,

        /// Output directory
        #[arg(short, long, default_value = "data")]
        output: String,
    },
}

fn setup_logging(verbose: bool, command_name: &str) -> Result<()> {
    std::fs::create_dir_all("logs")?;

    let log_filename = format!(
        "{}_{}.log",
        command_name,
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    );
    let log_path = PathBuf::from("logs").join(&log_filename);

    // Filter out noisy HTTP crates
    let level = if verbose { "debug" } else { "info" };
    let filter_str = format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn",
        level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let file_appender = tracing_appender::rolling::never("logs", &log_filename);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Log file: {}", log_path.display());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command_name = match &cli.command {
        None | Some(Commands::Summary) => "summary",
        Some(Commands::Top) => "top",
        Some(Commands::Klines { .. }) => "klines",
        Some(Commands::Download { .. }) => "download",
    };

    setup_logging(cli.verbose, command_name)?;

    match cli.command {
        None | Some(Commands::Summary) => commands::summary::run(),

        Some(Commands::Top) => commands::top::run(),

        Some(Commands::Klines {
            symbol,
            interval,
            limit,
            source,
        }) => commands::klines::run(symbol, interval, limit, source),

        Some(Commands::Download {
            symbol,
            interval,
            limit,
            output,
        }) => commands::download::run(symbol, interval, limit, output),
    }
}

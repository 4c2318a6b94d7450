//! Query the gas price oracle through the cached manager
//!
//! Usage:
//!   tool_gas_price [--config <path>] [--priority <tier>]... [--max-age-ms <ms>] [--repeat <n>]
//!
//! Every round asks for each priority; rounds after the first show which
//! answers came from the cache. `--debug-gas` and `--debug-cache` turn on
//! the matching debug logs.

use clap::Parser;
use gasstation::config::{load_config_from_path, CONFIG_FILE_PATH};
use gasstation::gas::{GasPriceManager, Wei};
use gasstation::logger::{self, LogTag};
use std::time::Duration;

#[derive(Parser, Debug)]
#[allow(dead_code)]
#[command(name = "tool_gas_price")]
#[command(about = "Fetch gas price suggestions from the configured oracle", long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = CONFIG_FILE_PATH)]
    config: String,

    /// Priority to query (fast, fastest, safeLow, average); repeatable
    #[arg(long = "priority", short = 'p')]
    priorities: Vec<String>,

    /// Override the configured cache max age
    #[arg(long)]
    max_age_ms: Option<u64>,

    /// Number of query rounds
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Pause between rounds
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    // Read by the logger straight from the process arguments
    #[arg(long, hide = true)]
    debug_gas: bool,
    #[arg(long, hide = true)]
    debug_cache: bool,
    #[arg(long, hide = true)]
    debug_config: bool,
    #[arg(long, hide = true)]
    debug_all: bool,
    #[arg(long, hide = true)]
    verbose: bool,
    #[arg(long, hide = true)]
    quiet: bool,
    #[arg(long, hide = true)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init();

    if let Err(e) = run(args).await {
        logger::error(LogTag::System, &format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = load_config_from_path(&args.config)?;
    if let Some(max_age_ms) = args.max_age_ms {
        config.max_age_ms = max_age_ms;
        config.validate()?;
    }

    let manager = GasPriceManager::from_config(&config)?;

    logger::info(
        LogTag::System,
        &format!(
            "Oracle {} (max age {}ms, default priority {})",
            manager.fetcher().endpoint(),
            config.max_age_ms,
            manager.default_priority()
        ),
    );

    let priorities = if args.priorities.is_empty() {
        vec![manager.default_priority().to_string()]
    } else {
        args.priorities.clone()
    };

    for round in 1..=args.repeat.max(1) {
        if args.repeat > 1 {
            logger::info(LogTag::System, &format!("Round {}/{}", round, args.repeat));
        }

        for priority in &priorities {
            match manager.suggest_gas_price_str(priority).await {
                Ok(price) => print_price(priority, price),
                Err(e) => logger::error(
                    LogTag::GasOracle,
                    &format!("{}: {}", priority, e),
                ),
            }
        }

        if round < args.repeat && args.interval_ms > 0 {
            tokio::time::sleep(Duration::from_millis(args.interval_ms)).await;
        }
    }

    let metrics = manager.metrics();
    logger::info(
        LogTag::Cache,
        &format!(
            "hits={} misses={} refreshes={} failures={} hit_rate={:.1}%",
            metrics.hits,
            metrics.misses,
            metrics.refreshes,
            metrics.failures,
            metrics.hit_rate() * 100.0
        ),
    );

    Ok(())
}

fn print_price(priority: &str, price: Wei) {
    logger::info(
        LogTag::GasOracle,
        &format!("{:<8} {} wei ({} gwei)", priority, price, price.to_gwei()),
    );
}

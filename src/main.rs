//! Match History - prints a summoner's recent ranked results and the form
//! their teammates were in going into each game.

use clap::Parser;
use match_history::{
    read_api_key, write_report, ApiResult, ClientConfig, Region, ResponseCache, RetryPolicy,
    RiotApi,
};
use std::path::PathBuf;
use std::time::Duration;

/// Ranked win/loss history for a summoner and their teammates
#[derive(Parser, Debug)]
#[command(name = "match_history")]
#[command(version, about, long_about = None)]
struct Args {
    /// Summoner name
    #[arg(long, default_value = "ioki")]
    name: String,

    /// LoL region
    #[arg(long, value_enum, default_value_t = Region::Na1)]
    region: Region,

    /// Search queue depth
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Terminate when the API key limit is reached instead of waiting
    #[arg(long, default_value_t = false)]
    no_wait: bool,

    /// Pause between attempts after a rate-limit response, in milliseconds
    #[arg(long, default_value_t = 2000)]
    backoff_ms: u64,

    /// Give up after this many rate-limited attempts (default: never)
    #[arg(long)]
    max_retries: Option<u32>,

    /// File holding the API key
    #[arg(long, default_value = ".api_key")]
    api_key_file: PathBuf,

    /// Response cache file
    #[arg(long, default_value_os_t = match_history::config::default_cache_path())]
    cache_file: PathBuf,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.region)
            .with_queue_depth(self.depth as usize)
            .with_retry(
                RetryPolicy {
                    wait_on_limit: !self.no_wait,
                    backoff: Duration::from_millis(self.backoff_ms),
                    max_attempts: None,
                }
                .with_max_retries(self.max_retries),
            )
    }
}

fn run(args: &Args, api_key: &str) -> ApiResult<()> {
    // Dropped on return, flushing whatever was fetched even on error.
    let mut cache = ResponseCache::load(&args.cache_file);
    let mut api = RiotApi::new(&args.client_config(), api_key, &mut cache);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut api, &args.name, &mut out)
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=match_history=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    let api_key = match read_api_key(&args.api_key_file) {
        Ok(key) => key,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args, &api_key) {
        log::error!("Application error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use pokedex::api::{PokeApi, PokeApiClient};
use pokedex::core::catalog::load_app;
use pokedex::core::config::{self, CliOverrides, ResolvedConfig};
use pokedex::core::state::StalePolicy;
use pokedex::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "pokedex", about = "Browse the PokeAPI catalog from the terminal")]
struct Args {
    /// Base URL of the PokeAPI instance (default: https://pokeapi.co/api/v2)
    #[arg(long)]
    base_url: Option<String>,

    /// What to do with a detail result that arrives after a newer selection
    #[arg(long, value_enum)]
    stale_results: Option<StalePolicy>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            stale_results: self.stale_results,
        }
    }
}

/// Initialize file logger - writes to pokedex.log in current directory
///
/// Installed before the config is read so config loading can log, then
/// narrowed to the configured level by [`apply_log_level`].
fn init_logging() {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("pokedex.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
}

fn apply_log_level(config: &ResolvedConfig) {
    log::set_max_level(config.log_level);
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            eprintln!("pokedex: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = config::resolve(&file_config, &args.overrides());
    apply_log_level(&config);

    log::info!(
        "Pokedex starting up: base_url={}, stale_policy={:?}",
        config.base_url,
        config.stale_policy
    );

    let api: Arc<dyn PokeApi> = Arc::new(PokeApiClient::new(
        config.base_url.clone(),
        config.catalog_limit,
    ));

    // Nothing to browse without the catalog: fail before touching the terminal.
    let app = match load_app(api.as_ref(), config.stale_policy).await {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to load list: {}", e);
            eprintln!("Failed to load list: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(app, api) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Application error: {}", e);
            eprintln!("Application error: {e}");
            ExitCode::FAILURE
        }
    }
}

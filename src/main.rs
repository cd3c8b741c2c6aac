use clap::Parser;
use greenthumb::core::catalog::Catalog;
use greenthumb::core::config::{self, ConfigError};
use greenthumb::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "greenthumb", about = "GreenThumb Gardens terminal storefront")]
struct Args {
    /// Config file to use instead of ~/.greenthumb/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the product catalog as JSON and exit
    #[arg(long)]
    catalog: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if args.catalog {
        let json = serde_json::to_string_pretty(&Catalog::builtin())?;
        println!("{json}");
        return Ok(());
    }

    // Config is read before the logger exists; problems are reported once logging is up
    let (file_config, config_error): (config::StoreConfig, Option<ConfigError>) =
        match config::load_config(args.config.as_deref()) {
            Ok(c) => (c, None),
            Err(e) => (config::StoreConfig::default(), Some(e)),
        };
    let resolved = config::resolve(&file_config, args.log_level.as_deref());

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file, using defaults: {}", e);
        eprintln!("greenthumb: {e} (using defaults)");
    }
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
        eprintln!("greenthumb: {warning}");
    }

    log::info!("GreenThumb starting up as '{}'", resolved.store_name);

    tui::run(resolved)
}

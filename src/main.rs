use std::path::Path;

use clap::Parser;

mod cli;
mod config;
mod generators;
mod models;

use crate::cli::{handlers, Args, CliCommand};
use crate::config::Config;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting passforge - password generator");
    log::debug!("Command line args: {:?}", args);

    let result = match args.command {
        Some(CliCommand::Generate {
            length,
            complexity,
            count,
            seed,
        }) => handlers::handle_generate(
            &config,
            length,
            complexity.as_deref(),
            count,
            seed,
            args.json,
        ),
        Some(CliCommand::Analyze { password }) => handlers::handle_analyze(&password, args.json),
        Some(CliCommand::Demo) | None => handlers::handle_demo(args.json),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}

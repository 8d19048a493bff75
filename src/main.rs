use clap::Parser;
use dsmr2json::{render, Config, OutputFormat};
use log::{error, info};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dsmr2json")]
#[command(about = "Parse a DSMR P1 telegram and print it as structured data")]
struct Cli {
    /// Config file, defaults to config/dsmr2json.yaml or dsmr2json.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
    /// File holding one telegram, stdin when omitted
    file: Option<PathBuf>,
}

fn read_telegram(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    let default_filter = std::env::var("DSMR_LOG_LEVEL").unwrap_or("info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::discover(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let text = match read_telegram(cli.file.as_ref()) {
        Ok(t) => t,
        Err(e) => {
            error!("Unable to read telegram: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let telegram = match config.parser().parse(&text) {
        Ok(t) => t,
        Err(e) => {
            error!("Telegram parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Parsed telegram with {} data objects", telegram.data_objects().len());

    match render(&telegram, cli.format.unwrap_or(config.output), config.pretty) {
        Ok(out) => {
            println!("{}", out.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

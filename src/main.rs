//! Douyin Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use douyin_downloader::{
    cli::Args,
    config::{validate_config, Config},
    download::{download_user_works, download_work, BatchState},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_run_stats},
    resolver::{classify, TargetMode},
    DouyinApi,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::InvalidUrl(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::INVALID_URL as u8)
                }
                Error::MissingConfig(_) | Error::ConfigValidation { .. } => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Extraction(_) | Error::Api(_) | Error::Json(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::Http(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Build configuration from defaults plus CLI/env overrides
    let mut config = Config::default();
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    print_config_summary(&config, &args.url);

    // Classify the input URL before touching the network
    let mode = classify(&args.url)?;

    let api = DouyinApi::new(&config)?;
    let mut state = BatchState::default();

    match mode {
        TargetMode::Single => {
            download_work(&api, &config, &mut state, &args.url, None).await?;
            print_run_stats(&state);
        }
        TargetMode::User => {
            download_user_works(&api, &config, &mut state, &args.url).await?;
        }
    }

    Ok(())
}

use std::process;

use clap::Parser;
use tracing::error;

use job_recommender::cli::{render_json, render_report, run, Cli};
use job_recommender::config::Config;
use job_recommender::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            process::exit(1);
        }
    };

    let (level, level_overrides_env) = cli.log_level(&config.rust_log);
    init_tracing(level, level_overrides_env, Cli::LOG_OUTPUT);

    let response = match run(&cli, config).await {
        Ok(response) => response,
        Err(e) => {
            error!("Job agent failed: {e:#}");
            process::exit(1);
        }
    };

    if cli.json {
        match render_json(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("{e:#}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", render_report(&response, cli.mode));
    }

    if !response.success {
        process::exit(2);
    }
}

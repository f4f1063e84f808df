//! admin - Student administration console
//!
//! Command-line front end for the student administration backend.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the session is kept under .admin/)
//! admin login --email admin@uni.edu --password secret
//!
//! # List students whose fields mention "physics", sorted by age
//! admin student list --filter physics --sort age --desc --pretty
//!
//! # Delete without the confirmation prompt
//! admin --yes professor delete 7
//! ```

use admin_cli::{App, Cli, initialize_logger};
use admin_client::NoticeLevel;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match admin_config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(server) = &cli.server {
        config.api.base_url = server.clone();
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let log_file = match &config.logging.file {
        Some(file) => match admin_config::Config::config_dir() {
            Ok(dir) => Some(dir.join(file)),
            Err(_) => Some(PathBuf::from(file)),
        },
        None => None,
    };

    if let Err(e) = initialize_logger(
        config.logging.level,
        log_file,
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let result = app.run(&cli).await;
    let notice = app.notifier().latest();

    // Handle result
    match result {
        Ok(value) => {
            if let Some(notice) = notice {
                eprintln!("{}", notice.message);
            }

            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            // An error notice already names the failed action
            match notice.filter(|n| n.level == NoticeLevel::Error) {
                Some(notice) => eprintln!("Error: {}", notice.message),
                None => eprintln!("Error: {}", e.user_message()),
            }
            ExitCode::FAILURE
        }
    }
}

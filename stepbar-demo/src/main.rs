mod app;
mod cli;
mod error;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::cli::CliArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse_args();

    match File::create("stepbar-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file: {}", e),
    }

    if let Err(e) = app::run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

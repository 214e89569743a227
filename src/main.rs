use clap::Parser;
use std::process::ExitCode;

use lookahead::cli::Cli;
use lookahead::logging;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; GITHUB_TOKEN may come from the environment
    let _ = dotenvy::dotenv();

    let command = Cli::parse().into_command();

    if command.is_interactive() {
        if let Err(e) = logging::init_file() {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    } else {
        logging::init_stderr();
    }

    match command.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

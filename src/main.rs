use std::process::ExitCode;
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;
use paren_lang::Config;
use paren_lang::error::Error;

fn main() -> ExitCode {
    let config: Config = Config::parse();

    let default_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match paren_lang::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported by the parser
        Err(Error::Parse(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}

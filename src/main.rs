use clap::Parser;
use dotwrap::cli::Cli;
use dotwrap::commands;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "dotwrap=debug"
    } else {
        "dotwrap=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            dotwrap::ui::error(format!("{err:#}"));
            match err.downcast_ref::<dotwrap::Error>() {
                Some(err) => ExitCode::from(err.exit_code()),
                None => ExitCode::FAILURE,
            }
        }
    }
}

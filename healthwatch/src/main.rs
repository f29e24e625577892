use clap::Parser;
use healthwatch::config::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(about = "Serves cached country-level public-health statistics as JSON")]
struct Cli {
    /// Path to the YAML config file; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match cli.config {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config from {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    if let Err(err) = healthwatch::run(config) {
        eprintln!("healthwatch exited with error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

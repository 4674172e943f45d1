//! Prober binary entry point

use std::path::PathBuf;

use clap::Parser;
use settings::Settings;
use settings::logging::{init_tracing, log_error, log_startup};

use prober::{Command, ProberResult, RealClientFactory, run_command};

#[derive(Parser)]
#[command(name = "prober")]
#[command(about = "Inspect, validate and probe the chatbot's provider configuration")]
struct Args {
    /// Read this dotenv file instead of searching for `.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Log level for prober and settings (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ProberResult<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    log_startup("prober", &format!("{:?}", args.command));

    let resolved = match &args.env_file {
        Some(path) => Settings::from_env_file(path),
        None => Settings::load(),
    };
    let settings = match resolved {
        Ok(settings) => settings,
        Err(e) => {
            log_error("prober", "Loading settings", &e);
            return Err(e.into());
        }
    };

    let factory = RealClientFactory::new();
    let mut stdout = std::io::stdout();
    let code = run_command(&args.command, &settings, &factory, &mut stdout).await?;

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

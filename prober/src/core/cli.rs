//! Subcommands of the `prober` binary

use std::io::Write;

use clap::Subcommand;
use settings::Settings;

use crate::core::probe::probe;
use crate::error::ProberResult;
use crate::traits::ClientFactory;

/// Exit code when the configuration is incomplete
pub const EXIT_INVALID_CONFIG: i32 = 1;
/// Exit code when at least one provider check failed
pub const EXIT_PROBE_FAILED: i32 = 2;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved settings with secrets masked
    Show {
        /// Emit JSON instead of KEY=VALUE lines
        #[arg(long)]
        json: bool,
    },
    /// Check that all required settings are present
    Validate,
    /// Make one call to each provider and report the results
    Probe {
        /// Emit JSON instead of a human-readable report
        #[arg(long)]
        json: bool,
    },
}

/// Run one subcommand, writing its output to `out`. Returns the exit code.
pub async fn run_command<F, W>(command: &Command, settings: &Settings, factory: &F, out: &mut W) -> ProberResult<i32>
where
    F: ClientFactory + ?Sized,
    W: Write,
{
    match command {
        Command::Show { json } => {
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(settings)?)?;
            } else {
                writeln!(out, "{settings}")?;
            }
            Ok(0)
        }
        Command::Validate => match settings.validate() {
            Ok(()) => {
                writeln!(out, "✅ Configuration is valid")?;
                Ok(0)
            }
            Err(e) => {
                writeln!(out, "❌ Configuration is invalid:")?;
                for message in e.messages() {
                    writeln!(out, "  - {message}")?;
                }
                Ok(EXIT_INVALID_CONFIG)
            }
        },
        Command::Probe { json } => {
            let report = probe(settings, factory).await;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                writeln!(out, "{report}")?;
            }
            Ok(if report.all_passed() { 0 } else { EXIT_PROBE_FAILED })
        }
    }
}

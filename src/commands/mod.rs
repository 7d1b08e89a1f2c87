use crate::cli::{Cli, Commands};
use crate::config;
use crate::error::Error;
use crate::provider::{self, ProviderKind};
use crate::sync::SyncOutcome;
use crate::ui;
use anyhow::Result;

mod doctor;
mod install;
mod uninstall;

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Install { provider } => {
            let kind = prepare_provider(&provider)?;
            let path = config::resolve_config_path(cli.config.as_deref())?;
            install::execute(kind, &path)
        }

        Commands::Uninstall { provider } => {
            let kind = prepare_provider(&provider)?;
            let path = config::resolve_config_path(cli.config.as_deref())?;
            uninstall::execute(kind, &path)
        }

        Commands::Doctor { provider } => doctor::execute(prepare_provider(&provider)?),
    }
}

/// Resolve the provider name and make sure its executable is reachable.
fn prepare_provider(name: &str) -> Result<ProviderKind> {
    let kind = ProviderKind::parse(name)?;
    provider::ensure_available(kind)?;
    Ok(kind)
}

/// Print what a sync run applied and turn its outcome into the command result.
fn finish(
    outcome: SyncOutcome,
    label: &str,
    summary: impl FnOnce(usize) -> String,
) -> Result<()> {
    match outcome {
        SyncOutcome::Success(report) => {
            for name in &report.applied {
                ui::success(label, name);
            }
            for name in &report.unconfirmed {
                ui::warn(format!(
                    "{name}: delete exited non-zero (alias may already be absent)"
                ));
            }
            ui::info(summary(report.len()));
            Ok(())
        }
        SyncOutcome::ValidationFailed(err) => {
            ui::warn("no aliases were changed");
            Err(err.into())
        }
        SyncOutcome::PartialFailure(err) => {
            if let Error::PartialFailure { applied, .. } = &err {
                for name in applied {
                    ui::success(label, name);
                }
            }
            Err(err.into())
        }
    }
}

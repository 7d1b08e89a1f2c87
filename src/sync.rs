use tracing::{info, warn};

use crate::alias;
use crate::config::ProviderAliasSet;
use crate::error::{Error, Result};
use crate::provider::{CommandRunner, Provider, SyncOperation};

/// What a completed run applied, in the order it was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub applied: Vec<String>,
    /// Deletes the provider answered with a non-zero exit, usually because
    /// the alias was already gone. Reported, never retried.
    pub unconfirmed: Vec<String>,
}

impl SyncReport {
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Terminal state of an install or uninstall run.
#[derive(Debug)]
pub enum SyncOutcome {
    Success(SyncReport),
    /// Rejected before any provider call.
    ValidationFailed(Error),
    /// Some operations applied, the next one failed, the rest were skipped.
    PartialFailure(Error),
}

impl SyncOutcome {
    pub fn from_result(result: Result<SyncReport>) -> Self {
        match result {
            Ok(report) => SyncOutcome::Success(report),
            Err(err) if err.is_validation() => SyncOutcome::ValidationFailed(err),
            Err(err) => SyncOutcome::PartialFailure(err),
        }
    }
}

/// Drives install and uninstall for a whole alias set, one operation at a time.
pub struct SyncPlanner<'a, R: CommandRunner> {
    provider: &'a Provider<R>,
}

impl<'a, R: CommandRunner> SyncPlanner<'a, R> {
    pub fn new(provider: &'a Provider<R>) -> Self {
        Self { provider }
    }

    /// Operations `install` would issue, in order. Touches nothing.
    pub fn plan_install(set: &ProviderAliasSet) -> Result<Vec<SyncOperation>> {
        Ok(alias::validate(set)?
            .into_iter()
            .map(SyncOperation::Install)
            .collect())
    }

    /// Operations `uninstall` would issue, in order. Only names declared in
    /// the set are ever deleted.
    pub fn plan_uninstall(set: &ProviderAliasSet) -> Result<Vec<SyncOperation>> {
        Ok(alias::validate_names(set)?
            .into_iter()
            .map(SyncOperation::Uninstall)
            .collect())
    }

    /// Set or overwrite every alias in the set, sorted by name.
    pub fn install(&self, set: &ProviderAliasSet) -> Result<SyncReport> {
        let operations = Self::plan_install(set)?;
        self.run(operations)
    }

    /// Delete every alias named in the set, sorted by name.
    pub fn uninstall(&self, set: &ProviderAliasSet) -> Result<SyncReport> {
        let operations = Self::plan_uninstall(set)?;
        self.run(operations)
    }

    /// Apply operations in order, stopping at the first failure. Nothing
    /// applied before the failure is rolled back.
    fn run(&self, operations: Vec<SyncOperation>) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        for operation in &operations {
            match self.provider.apply(operation) {
                Ok(output) if !output.success() => {
                    warn!(
                        alias = operation.alias_name(),
                        exit_code = output.status_code,
                        stderr = output.stderr.trim(),
                        "delete exited non-zero; treating alias as absent"
                    );
                    report.unconfirmed.push(operation.alias_name().to_string());
                }
                Ok(_) => {
                    info!(
                        alias = operation.alias_name(),
                        provider = %self.provider.kind(),
                        "{}",
                        describe(operation)
                    );
                    report.applied.push(operation.alias_name().to_string());
                }
                Err(err) => {
                    return Err(Error::PartialFailure {
                        applied: report.applied,
                        cause: Box::new(err),
                    });
                }
            }
        }

        Ok(report)
    }
}

fn describe(operation: &SyncOperation) -> &'static str {
    match operation {
        SyncOperation::Install(_) => "alias set",
        SyncOperation::Uninstall(_) => "alias removed",
    }
}

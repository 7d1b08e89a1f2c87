use crate::config::ProviderAliasSet;
use crate::provider::{Provider, ProviderKind, SystemRunner};
use crate::sync::{SyncOutcome, SyncPlanner};
use anyhow::Result;
use std::path::Path;

pub fn execute(kind: ProviderKind, config_path: &Path) -> Result<()> {
    let set = ProviderAliasSet::load(config_path, kind.as_str())?;
    let provider = Provider::new(kind, SystemRunner);

    let outcome = SyncOutcome::from_result(SyncPlanner::new(&provider).uninstall(&set));
    super::finish(outcome, "Removed", |n| {
        format!("{n} alias(es) removed from {}", set.provider())
    })
}

use crate::config::ProviderAliasSet;
use crate::provider::{Provider, ProviderKind, SystemRunner};
use crate::sync::{SyncOutcome, SyncPlanner};
use anyhow::Result;
use std::path::Path;

pub fn execute(kind: ProviderKind, config_path: &Path) -> Result<()> {
    let set = ProviderAliasSet::load(config_path, kind.as_str())?;
    let provider = Provider::new(kind, SystemRunner);

    let outcome = SyncOutcome::from_result(SyncPlanner::new(&provider).install(&set));
    super::finish(outcome, "Installed", |n| {
        format!("{n} alias(es) installed for {}", set.provider())
    })
}

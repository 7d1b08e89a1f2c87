use crate::alias::ALIAS_PREFIX;
use crate::provider::{Provider, ProviderKind, SystemRunner};
use crate::ui;
use anyhow::Result;

pub fn execute(kind: ProviderKind) -> Result<()> {
    let provider = Provider::new(kind, SystemRunner);
    let lines = provider.list_managed(ALIAS_PREFIX)?;

    if lines.is_empty() {
        ui::info(format!("No {ALIAS_PREFIX} aliases installed in {kind}."));
    } else {
        for line in lines {
            ui::status("Alias", line.trim());
        }
    }
    Ok(())
}

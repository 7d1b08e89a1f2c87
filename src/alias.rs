use regex::Regex;
use std::sync::OnceLock;

use crate::config::ProviderAliasSet;
use crate::error::{Error, Result};

/// Reserved prefix every managed alias name must carry.
pub const ALIAS_PREFIX: &str = "dw_";

/// An alias whose name passed the namespace check and whose command text
/// has been canonicalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAlias {
    pub name: String,
    pub command: String,
}

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Idempotent: `normalize_command(&normalize_command(s)) == normalize_command(s)`.
pub fn normalize_command(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^{}\S+$", regex::escape(ALIAS_PREFIX)))
            .expect("alias name pattern is valid")
    })
}

/// Whether `name` belongs to the managed namespace.
pub fn is_managed_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

/// Every alias name in the set that lacks the reserved prefix, sorted.
fn namespace_violations(set: &ProviderAliasSet) -> Vec<String> {
    let mut keys: Vec<String> = set
        .aliases()
        .iter()
        .filter(|alias| !is_managed_name(&alias.name))
        .map(|alias| alias.name.clone())
        .collect();
    keys.sort();
    keys
}

fn check_namespace(set: &ProviderAliasSet) -> Result<()> {
    let keys = namespace_violations(set);
    if keys.is_empty() {
        Ok(())
    } else {
        Err(Error::NamespaceViolation { keys })
    }
}

/// Validate the whole set and return normalised aliases sorted by name.
///
/// All-or-nothing: any offending key fails the entire set, and every
/// offender is reported in one error.
pub fn validate(set: &ProviderAliasSet) -> Result<Vec<NormalizedAlias>> {
    check_namespace(set)?;

    let mut normalized: Vec<NormalizedAlias> = set
        .aliases()
        .iter()
        .map(|alias| NormalizedAlias {
            name: alias.name.clone(),
            command: normalize_command(&alias.command),
        })
        .collect();
    normalized.sort_by(|a, b| a.name.cmp(&b.name));

    let empty: Vec<String> = normalized
        .iter()
        .filter(|alias| alias.command.is_empty())
        .map(|alias| alias.name.clone())
        .collect();
    if !empty.is_empty() {
        return Err(Error::EmptyCommand { keys: empty });
    }

    Ok(normalized)
}

/// Namespace-check the set and return its alias names sorted.
///
/// Used for removal, where command text is irrelevant.
pub fn validate_names(set: &ProviderAliasSet) -> Result<Vec<String>> {
    check_namespace(set)?;

    let mut names: Vec<String> = set
        .aliases()
        .iter()
        .map(|alias| alias.name.clone())
        .collect();
    names.sort();
    Ok(names)
}

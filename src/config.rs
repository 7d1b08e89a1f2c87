use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Provider targeted when none is given on the command line.
pub const DEFAULT_PROVIDER: &str = "gh";

/// File name of the alias config inside the dotwrap config directory.
pub const CONFIG_FILE_NAME: &str = "aliases.toml";

/// Raw shape of `aliases.toml`.
///
/// ```toml
/// [providers.gh.aliases]
/// dw_prs = "pr list"
/// ```
///
/// Provider sections stay untyped until one is requested, so a broken
/// section for another provider does not block this one.
#[derive(Debug, Default, Deserialize)]
struct AliasesFile {
    #[serde(default)]
    providers: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderTable {
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// A single alias as declared in the config file, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDefinition {
    pub name: String,
    pub command: String,
}

impl AliasDefinition {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// The declared alias set for one provider.
///
/// Names are unique because they come from TOML table keys. No ordering is
/// promised here; the validator sorts before anything is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAliasSet {
    provider: String,
    aliases: Vec<AliasDefinition>,
}

impl ProviderAliasSet {
    pub fn new(provider: impl Into<String>, aliases: Vec<AliasDefinition>) -> Self {
        Self {
            provider: provider.into(),
            aliases,
        }
    }

    /// Load the alias set for `provider` from the config file at `path`.
    ///
    /// Only checks that the file parses and the provider section holds at least
    /// one alias. Names and commands are checked by [`crate::alias::validate`].
    pub fn load(path: &Path, provider: &str) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|err| Error::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        Self::parse(&contents, path, provider)
    }

    fn parse(contents: &str, path: &Path, provider: &str) -> Result<Self> {
        let mut file: AliasesFile = toml::from_str(contents).map_err(|err| Error::ConfigParse {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })?;

        let section = file
            .providers
            .remove(provider)
            .ok_or_else(|| Error::ProviderNotConfigured {
                provider: provider.to_string(),
                path: path.to_path_buf(),
            })?;
        let table: ProviderTable = section.try_into().map_err(|err: toml::de::Error| {
            Error::ConfigParse {
                path: path.to_path_buf(),
                message: format!("[providers.{provider}]: {}", err.message()),
            }
        })?;

        if table.aliases.is_empty() {
            return Err(Error::NoAliases {
                provider: provider.to_string(),
            });
        }

        let aliases = table
            .aliases
            .into_iter()
            .map(|(name, command)| AliasDefinition { name, command })
            .collect();

        Ok(Self {
            provider: provider.to_string(),
            aliases,
        })
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn aliases(&self) -> &[AliasDefinition] {
        &self.aliases
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Resolve the config path: an explicit path (with `~` expanded) wins,
/// otherwise `$XDG_CONFIG_HOME/dotwrap/aliases.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => {
            let raw = path.to_string_lossy();
            Ok(PathBuf::from(shellexpand::tilde(&raw).into_owned()))
        }
        None => Ok(crate::util::xdg::config_dir()?.join(CONFIG_FILE_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_provider_aliases() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[providers.gh.aliases]
dw_prs = "pr list"
dw_prmeta = """
  pr   view  --json
  title
"""
"#,
        );

        let set = ProviderAliasSet::load(&path, "gh").unwrap();
        assert_eq!(set.provider(), "gh");
        assert_eq!(set.len(), 2);

        let prs = set
            .aliases()
            .iter()
            .find(|alias| alias.name == "dw_prs")
            .unwrap();
        assert_eq!(prs.command, "pr list");

        // Loading leaves command text untouched.
        let meta = set
            .aliases()
            .iter()
            .find(|alias| alias.name == "dw_prmeta")
            .unwrap();
        assert!(meta.command.contains("pr   view"));
    }

    #[test]
    fn load_keeps_unprefixed_names_for_the_validator() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[providers.gh.aliases]
bad_key = "x"
"#,
        );

        let set = ProviderAliasSet::load(&path, "gh").unwrap();
        assert_eq!(set.aliases(), &[AliasDefinition::new("bad_key", "x")]);
    }

    #[test]
    fn missing_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);

        let err = ProviderAliasSet::load(&path, "gh").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.to_string().contains("aliases.toml"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[providers.gh.aliases\ndw_x = ");

        let err = ProviderAliasSet::load(&path, "gh").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn non_string_command_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[providers.gh.aliases]\ndw_x = 42\n");

        let err = ProviderAliasSet::load(&path, "gh").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn absent_provider_section() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[providers.glab.aliases]\ndw_x = \"mr list\"\n");

        let err = ProviderAliasSet::load(&path, "gh").unwrap_err();
        assert!(matches!(err, Error::ProviderNotConfigured { .. }));
    }

    #[test]
    fn broken_sibling_provider_section_is_ignored() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[providers.gh.aliases]
dw_a = "a"

[providers.other]
aliases = 5
"#,
        );

        let set = ProviderAliasSet::load(&path, "gh").unwrap();
        assert_eq!(set.aliases(), &[AliasDefinition::new("dw_a", "a")]);

        let err = ProviderAliasSet::load(&path, "other").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("[providers.other]"));
    }

    #[test]
    fn empty_alias_table() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[providers.gh.aliases]\n");

        let err = ProviderAliasSet::load(&path, "gh").unwrap_err();
        assert!(matches!(err, Error::NoAliases { .. }));
    }

    #[test]
    fn explicit_config_path_expands_tilde() {
        let home = crate::util::xdg::home_dir().unwrap();
        let resolved = resolve_config_path(Some(Path::new("~/aliases.toml"))).unwrap();
        assert_eq!(resolved, home.join("aliases.toml"));
    }
}

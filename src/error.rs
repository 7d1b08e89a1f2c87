use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::alias::ALIAS_PREFIX;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop an install, uninstall, or doctor run.
///
/// The config variants (`ConfigNotFound`, `ConfigParse`, `ProviderNotConfigured`,
/// `NoAliases`) and the validation variants (`NamespaceViolation`, `EmptyCommand`)
/// are raised before any provider process is spawned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("provider '{provider}' is not configured in {}", path.display())]
    ProviderNotConfigured { provider: String, path: PathBuf },

    #[error("missing or empty [providers.{provider}.aliases]")]
    NoAliases { provider: String },

    #[error(
        "invalid alias key(s) (must be {} followed by a name): {}",
        ALIAS_PREFIX,
        keys.join(", ")
    )]
    NamespaceViolation { keys: Vec<String> },

    #[error("alias command must be a non-empty string: {}", keys.join(", "))]
    EmptyCommand { keys: Vec<String> },

    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("missing required tool: {program} not found on PATH")]
    ProviderNotFound { program: String },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    ProviderCommandFailed(Box<CommandFailure>),

    /// A provider call failed (`ProviderCommandFailed` or `Spawn`) after
    /// `applied` operations went through.
    #[error("{cause} ({} alias(es) applied before the failure)", applied.len())]
    PartialFailure {
        applied: Vec<String>,
        cause: Box<Error>,
    },
}

impl Error {
    /// True when the run was rejected before touching the provider.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NamespaceViolation { .. } | Error::EmptyCommand { .. }
        )
    }

    /// Process exit status for this error. A provider dotwrap cannot drive is
    /// an invalid invocation, like a clap usage error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UnsupportedProvider(_) => 2,
            _ => 1,
        }
    }
}

/// A provider invocation that exited non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// Alias the operation targeted, if any (`alias list` has none).
    pub alias: Option<String>,
    pub argv: Vec<String>,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` failed", self.argv.join(" "))?;
        if let Some(alias) = &self.alias {
            write!(f, " for {alias}")?;
        }
        write!(f, " (exit code {})", self.exit_code)?;

        let details = self.stderr.trim();
        if !details.is_empty() {
            write!(f, ": {details}")?;
        }
        Ok(())
    }
}

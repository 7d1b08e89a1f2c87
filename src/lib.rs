// Public API
pub mod alias;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod provider;
pub mod sync;
pub mod ui;

mod util;

// Re-export main types
pub use alias::{normalize_command, NormalizedAlias, ALIAS_PREFIX};
pub use config::{AliasDefinition, ProviderAliasSet, DEFAULT_PROVIDER};
pub use error::{CommandFailure, Error, Result};
pub use provider::{
    CommandOutput, CommandRunner, Provider, ProviderKind, SyncOperation, SystemRunner,
};
pub use sync::{SyncOutcome, SyncPlanner, SyncReport};

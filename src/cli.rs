use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_PROVIDER;

/// dotwrap - namespaced aliases for provider CLIs
///
/// dotwrap installs and removes the aliases declared in `aliases.toml`
/// (`[providers.<name>.aliases]`). Only aliases starting with `dw_` are ever
/// touched, so your own provider aliases are left alone.
#[derive(Parser, Debug)]
#[command(name = "dotwrap", author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to aliases.toml (defaults to $XDG_CONFIG_HOME/dotwrap/aliases.toml)
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        env = "DOTWRAP_CONFIG"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install (or overwrite) every declared alias
    Install {
        /// Provider CLI to configure
        #[arg(value_name = "PROVIDER", default_value = DEFAULT_PROVIDER)]
        provider: String,
    },

    /// Remove every declared alias from the provider
    Uninstall {
        /// Provider CLI to configure
        #[arg(value_name = "PROVIDER", default_value = DEFAULT_PROVIDER)]
        provider: String,
    },

    /// Show the dotwrap-managed aliases the provider currently has
    Doctor {
        /// Provider CLI to inspect
        #[arg(value_name = "PROVIDER", default_value = DEFAULT_PROVIDER)]
        provider: String,
    },
}

use std::fmt;
use std::io;
use std::process::Command;
use tracing::debug;

use crate::alias::NormalizedAlias;
use crate::error::{CommandFailure, Error, Result};

/// One provider mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOperation {
    /// Define or overwrite an alias.
    Install(NormalizedAlias),
    /// Remove an alias by name.
    Uninstall(String),
}

impl SyncOperation {
    pub fn alias_name(&self) -> &str {
        match self {
            SyncOperation::Install(alias) => &alias.name,
            SyncOperation::Uninstall(name) => name,
        }
    }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_code == 0
    }
}

/// Runs a program to completion and captures its output.
///
/// This is the only place dotwrap spawns processes; tests swap in a recorder.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Spawns real processes, resolving `program` through `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        debug!(program, ?args, "spawning provider command");
        let output = Command::new(program).args(args).output()?;
        let status_code = output
            .status
            .code()
            .unwrap_or(if output.status.success() { 0 } else { 1 });

        Ok(CommandOutput {
            status_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// External tools whose alias stores dotwrap can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// GitHub CLI
    Gh,
}

impl ProviderKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gh" => Some(ProviderKind::Gh),
            _ => None,
        }
    }

    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| Error::UnsupportedProvider(name.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gh => "gh",
        }
    }

    /// Executable looked up on `PATH`.
    pub fn program(&self) -> &'static str {
        match self {
            ProviderKind::Gh => "gh",
        }
    }

    /// Arguments (without the program) for an operation.
    ///
    /// Installs always clobber so a new alias and a changed one take the same path.
    pub fn args_for(&self, operation: &SyncOperation) -> Vec<String> {
        match (self, operation) {
            (ProviderKind::Gh, SyncOperation::Install(alias)) => vec![
                "alias".to_string(),
                "set".to_string(),
                "--clobber".to_string(),
                alias.name.clone(),
                alias.command.clone(),
            ],
            (ProviderKind::Gh, SyncOperation::Uninstall(name)) => {
                vec!["alias".to_string(), "delete".to_string(), name.clone()]
            }
        }
    }

    pub fn list_args(&self) -> Vec<String> {
        match self {
            ProviderKind::Gh => vec!["alias".to_string(), "list".to_string()],
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translates operations into provider argv and executes them.
#[derive(Debug)]
pub struct Provider<R: CommandRunner> {
    kind: ProviderKind,
    runner: R,
}

impl<R: CommandRunner> Provider<R> {
    pub fn new(kind: ProviderKind, runner: R) -> Self {
        Self { kind, runner }
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Full argv, program first, for an operation.
    pub fn argv(&self, operation: &SyncOperation) -> Vec<String> {
        self.command_line(self.kind.args_for(operation))
    }

    fn command_line(&self, args: Vec<String>) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.kind.program().to_string());
        argv.extend(args);
        argv
    }

    /// Run a full argv; the first element is always the provider program.
    fn execute(&self, argv: &[String]) -> Result<CommandOutput> {
        let program = self.kind.program();
        self.runner
            .run(program, &argv[1..])
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })
    }

    /// Apply one operation.
    ///
    /// A non-zero install exit becomes `ProviderCommandFailed`. Deletes are
    /// idempotent: their output is returned whatever the exit status, and the
    /// caller decides how to report a non-zero one.
    pub fn apply(&self, operation: &SyncOperation) -> Result<CommandOutput> {
        let argv = self.argv(operation);
        let output = self.execute(&argv)?;
        if output.success() || matches!(operation, SyncOperation::Uninstall(_)) {
            return Ok(output);
        }

        Err(Error::ProviderCommandFailed(Box::new(CommandFailure {
            alias: Some(operation.alias_name().to_string()),
            argv,
            exit_code: output.status_code,
            stdout: output.stdout,
            stderr: output.stderr,
        })))
    }

    /// Lines of the provider's alias listing that belong to the managed namespace.
    pub fn list_managed(&self, prefix: &str) -> Result<Vec<String>> {
        let argv = self.command_line(self.kind.list_args());
        let output = self.execute(&argv)?;
        if !output.success() {
            return Err(Error::ProviderCommandFailed(Box::new(CommandFailure {
                alias: None,
                argv,
                exit_code: output.status_code,
                stdout: output.stdout,
                stderr: output.stderr,
            })));
        }

        Ok(output
            .stdout
            .lines()
            .filter(|line| line.trim_start().starts_with(prefix))
            .map(str::to_string)
            .collect())
    }
}

/// Fail with `ProviderNotFound` unless the provider executable is on `PATH`.
pub fn ensure_available(kind: ProviderKind) -> Result<()> {
    let path = which::which(kind.program()).map_err(|_| Error::ProviderNotFound {
        program: kind.program().to_string(),
    })?;
    debug!(path = %path.display(), "found {}", kind.program());
    Ok(())
}

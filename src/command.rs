use crate::env::Environment;
use crate::parser::Command;
use anyhow::Result;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Object-safe trait for anything the shell can run.
///
/// Implemented by built-ins via a blanket impl and by the external command
/// launcher. Execution consumes the command: one instance is created per
/// input line and dispatched exactly once.
pub trait ExecutableCommand {
    /// Executes the command against the session environment.
    fn execute(self: Box<Self>, env: &mut Environment) -> Result<ExitCode>;
}

/// Factory that tries to create an executable from a parsed [`Command`].
///
/// Returns `None` when the factory doesn't recognize `cmd.program()`.
/// Factories are queried in order, so built-ins registered ahead of the
/// external launcher always intercept their verbs before any spawn decision.
pub trait CommandFactory {
    /// Attempt to create an executable instance for the parsed command.
    fn try_create(&self, env: &Environment, cmd: &Command) -> Option<Box<dyn ExecutableCommand>>;
}

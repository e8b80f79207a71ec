use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::env::Environment;
use crate::interpreter::Factory;
use crate::parser::Command;
use anyhow::{Context, Result};
use argh::{EarlyExit, FromArgs};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// in-process without spawning a child process. Redirection fields on the parsed
/// command have no built-in semantics and are ignored.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cd" or "exit".
    fn name() -> &'static str;

    /// Executes the command against the session environment.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for error.
    fn execute(self, env: &mut Environment) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, env: &mut Environment) -> Result<ExitCode> {
        match T::execute(*self, env) {
            Ok(code) => Ok(code),
            // Built-in failures are recovered here: one line on the error
            // channel, non-zero code, and the session carries on.
            Err(e) => {
                eprintln!("{e:#}");
                Ok(1)
            }
        }
    }
}

/// Fallback executable produced when argh rejects the arguments
/// (or the user asked for `--help`): prints argh's output and returns
/// the matching status without touching the environment.
struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(self: Box<Self>, _env: &mut Environment) -> Result<ExitCode> {
        if self.is_error {
            eprint!("{}", self.output);
            Ok(1)
        } else {
            print!("{}", self.output);
            Ok(0)
        }
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, _env: &Environment, cmd: &Command) -> Option<Box<dyn ExecutableCommand>> {
        if cmd.program()? != T::name() {
            return None;
        }
        let args: Vec<&str> = cmd.args[1..].iter().map(String::as_str).collect();
        Some(match T::from_args(&[T::name()], &args) {
            Ok(builtin) => Box::new(builtin),
            Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                output,
                is_error: status.is_err(),
            }),
        })
    }
}

#[derive(FromArgs)]
/// Change the current working directory.
/// If no target is provided, changes to the directory specified by the HOME environment variable.
pub struct Cd {
    #[argh(positional, greedy)]
    /// directory to switch to; absolute or relative to the current directory.
    /// Defaults to $HOME when omitted; extra operands are ignored, matching
    /// the historic behavior.
    pub args: Vec<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn execute(self, env: &mut Environment) -> Result<ExitCode> {
        let target = match self.args.first() {
            Some(t) if !t.is_empty() => PathBuf::from(t),
            _ => {
                if let Some(home) = env.get_var("HOME") {
                    PathBuf::from(home)
                } else {
                    return Err(anyhow::anyhow!("cd: no target and HOME not set"));
                }
            }
        };

        let new_dir = env.resolve(&target);
        let canonical = fs::canonicalize(&new_dir)
            .with_context(|| format!("cd: can't chdir to {}", new_dir.display()))?;

        env::set_current_dir(&canonical)
            .with_context(|| format!("cd: can't chdir to {}", canonical.display()))?;
        env.current_dir = canonical;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// End the session with success status.
/// Any trailing tokens are accepted and ignored.
pub struct Exit {
    #[argh(positional, greedy)]
    /// ignored; the historic shell exits regardless of what follows the verb.
    pub rest: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, env: &mut Environment) -> Result<ExitCode> {
        // The session loop observes the flag and terminates before reading
        // another line; the process then exits with success status.
        env.should_exit = true;
        Ok(0)
    }
}

use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::env::Environment;
use crate::interpreter::Factory;
use crate::parser::Command;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Launcher for commands that are not built-ins.
///
/// Holds the resolved program path, the remaining argument vector, and the
/// redirection requests carried over from the parsed command. Execution
/// spawns a child process with the requested streams, the session's variable
/// map and working directory, then blocks until the child terminates.
pub struct ExternalCommand {
    program: PathBuf,
    args: Vec<String>,
    input_path: Option<String>,
    output_path: Option<String>,
    append_output: bool,
}

impl ExternalCommand {
    pub fn new(program: PathBuf, cmd: &Command) -> Self {
        Self {
            program,
            args: cmd.args[1..].to_vec(),
            input_path: cmd.input_path.clone(),
            output_path: cmd.output_path.clone(),
            append_output: cmd.append_output,
        }
    }

    /// Open the requested redirection files, relative to the session's
    /// current directory, and convert them into [`Stdio`] handles.
    ///
    /// A stream with no redirection is inherited from the shell. An open
    /// failure aborts this command before any child is created; it never
    /// affects the session.
    fn open_streams(&self, env: &Environment) -> Result<(Stdio, Stdio)> {
        let stdin = match &self.input_path {
            Some(path) => {
                let file = File::open(env.resolve(path))
                    .with_context(|| format!("cannot open {} for reading", path))?;
                Stdio::from(file)
            }
            None => Stdio::inherit(),
        };

        let stdout = match &self.output_path {
            Some(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .append(self.append_output)
                    .truncate(!self.append_output)
                    .open(env.resolve(path))
                    .with_context(|| format!("cannot open {} for writing", path))?;
                Stdio::from(file)
            }
            None => Stdio::inherit(),
        };

        Ok((stdin, stdout))
    }
}

impl CommandFactory for Factory<ExternalCommand> {
    fn try_create(&self, env: &Environment, cmd: &Command) -> Option<Box<dyn ExecutableCommand>> {
        let name = cmd.program()?;
        let search_paths = env.get_var("PATH")?;
        let program = resolve_program(OsStr::new(&search_paths), Path::new(name))?;
        Some(Box::new(ExternalCommand::new(program, cmd)))
    }
}

impl ExecutableCommand for ExternalCommand {
    fn execute(self: Box<Self>, env: &mut Environment) -> Result<ExitCode> {
        let (stdin, stdout) = self.open_streams(env)?;

        let mut child = std::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(stdin)
            .stdout(stdout)
            .envs(env.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&env.current_dir)
            .spawn()
            .with_context(|| format!("cannot run {}", self.program.display()))?;

        // Strictly sequential: the session suspends here until this child
        // terminates. The status is consumed; nothing is propagated beyond
        // the numeric code, which the session loop discards.
        let exit_status = child
            .wait()
            .with_context(|| format!("failed to wait for {}", self.program.display()))?;
        Ok(exit_status.code().unwrap_or(1))
    }
}

/// Resolve a program name the way `execvp` would.
///
/// A name containing a path separator (absolute or relative, e.g. `/bin/ls`
/// or `./run.sh` or `bin/tool`) is taken as a path and returned if it exists.
/// A bare name is searched through each directory of `search_paths` (PATH),
/// returning the first existing match. An empty name never resolves.
pub(crate) fn resolve_program(search_paths: &OsStr, name: &Path) -> Option<PathBuf> {
    if name.as_os_str().is_empty() {
        return None;
    }
    if name.is_absolute() || name.components().count() > 1 {
        return name.exists().then(|| name.to_path_buf());
    }
    std::env::split_paths(search_paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}

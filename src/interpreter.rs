use crate::command::{CommandFactory, ExitCode};
use crate::env::Environment;
use crate::lexer;
use crate::parser::{self, Command};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only support commands defined in this crate — BuiltinCommand and ExternalCommand.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// A minimal shell-like interpreter that executes built-in and external commands.
///
/// The interpreter owns an [`Environment`] and a list of [`CommandFactory`]
/// objects queried in order for each parsed command; built-in factories are
/// registered ahead of the external launcher, so `cd` and `exit` are always
/// intercepted before any spawn decision. See [`Default`] for the factories
/// included out of the box.
///
/// Example
/// ```
/// use minish::Interpreter;
/// let mut sh = Interpreter::default();
/// let code = sh.run_line("echo hello world").unwrap();
/// assert_eq!(code, 0);
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            env: Environment::new(),
            commands,
        }
    }

    /// Dispatch a single parsed command.
    ///
    /// An empty command (no arguments at all) is a no-op and succeeds without
    /// touching any factory. Otherwise the factories are queried in order and
    /// the first match executes; an unrecognized program name is an error.
    pub fn run(&mut self, cmd: &Command) -> anyhow::Result<ExitCode> {
        let Some(program) = cmd.program() else {
            return Ok(0);
        };
        for factory in &self.commands {
            if let Some(exec) = factory.try_create(&self.env, cmd) {
                return exec.execute(&mut self.env);
            }
        }
        Err(anyhow::anyhow!("command not found: {}", program))
    }

    /// Tokenize, build, and dispatch one line of input.
    pub fn run_line(&mut self, line: &str) -> anyhow::Result<ExitCode> {
        let tokens = lexer::split_into_tokens(line);
        let cmd = parser::build_command(tokens);
        self.run(&cmd)
    }

    /// The interactive session loop.
    ///
    /// Reads one line at a time (rustyline strips the terminator), executes
    /// it synchronously, and reports any failure as a single line on stderr
    /// before moving on. The loop ends with success when the `exit` built-in
    /// sets the exit flag or when the input source is exhausted (Ctrl-D).
    pub fn repl(&mut self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new()?;

        while !self.env.should_exit {
            let prompt = format!("{}$ ", self.env.current_dir.display());
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    if let Err(err) = self.run_line(&line) {
                        eprintln!("{err:#}");
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    /// Read-only view of the session environment, mainly for tests and
    /// embedding callers.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Mutable view of the session environment.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default set of commands:
    /// - built-ins: `cd`, `exit`
    /// - external command launcher
    fn default() -> Self {
        use crate::builtin::{Cd, Exit};
        use crate::external::ExternalCommand;
        Self::new(vec![
            Box::new(Factory::<Cd>::default()),
            Box::new(Factory::<Exit>::default()),
            Box::new(Factory::<ExternalCommand>::default()),
        ])
    }
}

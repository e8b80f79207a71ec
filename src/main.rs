use minish::Interpreter;

fn main() -> anyhow::Result<()> {
    // The loop ends on the exit built-in or on end of input; both are a
    // successful termination of the session.
    Interpreter::default().repl()
}

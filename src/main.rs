use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use proplisp::{Interpretation, interpret_line, interpreter::evaluator::core::Environment, is_skippable};

/// Prompt shown by the interactive session.
const PROMPT: &str = "LPL >> ";
/// Line that ends the interactive session.
const QUIT: &str = "quit";

/// proplisp evaluates propositional logic written as lisp-style prefix
/// expressions, such as `(=> (and p q) p)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells proplisp to read CONTENTS as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the symbolic expression read from each line.
    #[arg(long)]
    show_sexpr: bool,

    /// Prints the logic expression built from each line.
    #[arg(long)]
    show_ast: bool,

    /// Script to run. Starts an interactive session when omitted.
    contents: Option<String>,
}

impl Args {
    fn report(&self, interpretation: &Interpretation) {
        if self.show_sexpr {
            println!("{}", interpretation.sexpr);
        }
        if self.show_ast {
            println!("{}", interpretation.expr);
        }
        println!("{}", interpretation.value);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut env = Environment::new();

    let Some(contents) = args.contents.as_deref() else {
        if let Err(e) = run_session(&args, &mut env) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(contents).unwrap_or_else(|_| {
                                        eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                        std::process::exit(1);
                                    })
    } else {
        contents.to_string()
    };

    for line in script.lines().filter(|line| !is_skippable(line)) {
        match interpret_line(line, &mut env) {
            Ok(interpretation) => args.report(&interpretation),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
    }
}

/// Reads lines from stdin until `quit` or end of input. Errors are reported
/// and the session continues with the same environment.
fn run_session(args: &Args, env: &mut Environment) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line == QUIT {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match interpret_line(line, env) {
            Ok(interpretation) => args.report(&interpretation),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    Ok(())
}

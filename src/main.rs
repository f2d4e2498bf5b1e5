use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use log::{debug, info};
use trigcalc::{
    Environment, Error, Expr, calculate,
    cli::Args,
    display::render_tree,
    evaluate,
    interpreter::evaluator::core::Context,
    parse,
    selftest::{self, Report},
    tokenize,
};

const BANNER: &str = "\
trigcalc: arithmetic with trigonometric functions
  operators:  + - * / ^      functions: sin cos tan
  constants:  pi e           variables: any other name
  commands:   'test' runs the self-test, 'exit' quits";

struct Session {
    show_tokens: bool,
    show_ast:    bool,
    tolerance:   f64,
    bindings:    Environment,
}

impl Session {
    fn new(args: &Args) -> Self {
        Self { show_tokens: args.tokens,
               show_ast:    args.ast,
               tolerance:   args.tolerance,
               bindings:    args.vars.iter().cloned().collect(), }
    }

    /// Tokenizes and parses `source`, printing the intermediate results that
    /// were asked for.
    fn prepare(&self, source: &str) -> Result<Expr, Error> {
        let tokens = tokenize(source)?;
        if self.show_tokens {
            println!("Tokens ({}):", tokens.len() - 1);
            for lexeme in &tokens[..tokens.len() - 1] {
                println!("  {lexeme}");
            }
        }

        let expr = parse(&tokens)?;
        if self.show_ast {
            println!("Syntax tree:");
            print!("{}", render_tree(&expr));
        }
        Ok(expr)
    }

    fn self_test(&self) -> Report {
        info!("running {} scenarios", selftest::SCENARIOS.len());
        selftest::run_scenarios(selftest::SCENARIOS, self.tolerance)
    }
}

/// Asks for the value of `name` until a valid constant expression is entered.
///
/// Returns `None` when the input ends.
fn prompt_value<I>(name: &str, input: &mut I) -> io::Result<Option<f64>>
    where I: Iterator<Item = io::Result<String>>
{
    loop {
        print!("  {name} = ");
        io::stdout().flush()?;
        let Some(line) = input.next().transpose()? else {
            return Ok(None);
        };
        match calculate(line.trim(), &Environment::new()) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => eprintln!("  {e}"),
        }
    }
}

fn interactive(session: &Session) -> io::Result<()> {
    println!("{BANNER}");
    let mut input = io::stdin().lock().lines();

    loop {
        print!("expr> ");
        io::stdout().flush()?;
        let Some(line) = input.next().transpose()? else {
            println!();
            return Ok(());
        };
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "exit" | "quit" | "salir" => return Ok(()),
            "test" => {
                println!("{}", session.self_test());
                continue;
            },
            _ => {},
        }

        let expr = match session.prepare(line) {
            Ok(expr) => expr,
            Err(e) => {
                eprintln!("{e}");
                continue;
            },
        };

        let mut env = session.bindings.clone();
        let missing = Context::new(&env).missing_variables(&expr);
        debug!("unbound variables: {missing:?}");
        for name in missing {
            match prompt_value(&name, &mut input)? {
                Some(value) => {
                    env.insert(name, value);
                },
                None => break,
            }
        }

        match evaluate(&expr, &env) {
            Ok(value) => println!("= {value}"),
            Err(e) => eprintln!("{}", Error::from(e)),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let session = Session::new(&args);

    if args.self_test {
        let report = session.self_test();
        println!("{report}");
        return if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    if let Some(expression) = &args.expression {
        let result = session.prepare(expression)
                            .and_then(|expr| evaluate(&expr, &session.bindings).map_err(Error::from));
        return match result {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = interactive(&session) {
        eprintln!("Failed to read input: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

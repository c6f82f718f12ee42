//! Monkey CLI
//!
//! Command-line interface for the Monkey tokenizer.

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process;

use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use monkey_lang::{repl, Lexer, MonkeyResult, VERSION};

/// Environment variable holding the log filter
const LOG_ENV: &str = "MONKEY_LOG";

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        // No arguments: start REPL
        println!("Monkey v{} - Token REPL", VERSION);
        println!("Press Ctrl-D to quit\n");
        let mut stdout = io::stdout();
        if let Err(e) = repl::start(io::stdin().lock(), &mut stdout) {
            fail(&e.to_string());
        }
        return;
    }

    let mut show_help = false;
    let mut input: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => show_help = true,
            "-" => input = Some(arg),
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => input = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    let result = match input {
        Some(name) if name == "-" => {
            print_tokens("<stdin>", io::stdin().lock()).map_err(|e| e.to_string())
        }
        Some(name) => show_file_tokens(name),
        None => {
            eprintln!("Error: No input file specified");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        fail(&e);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    // A second subscriber cannot be installed; logging is best-effort here.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: monkey [file | -]");
    eprintln!("       monkey --help");
}

fn print_help() {
    println!("Monkey v{} - streaming tokenizer", VERSION);
    println!();
    println!("USAGE:");
    println!("    monkey [OPTIONS] [file]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    monkey script.mk         Show tokens from a file");
    println!("    cat script.mk | monkey - Show tokens from stdin");
    println!("    monkey                   Start interactive REPL");
    println!();
    println!("ENVIRONMENT:");
    println!("    {}=<filter>      Log filter, e.g. debug or monkey_lang=trace", LOG_ENV);
}

/// Show tokens from lexing a file
fn show_file_tokens(filename: &str) -> Result<(), String> {
    let file = File::open(filename)
        .map_err(|e| format!("Failed to open file '{}': {}", filename, e))?;

    print_tokens(filename, BufReader::new(file)).map_err(|e| format!("{}: {}", filename, e))
}

/// Stream tokens from `source` to stdout as they are produced
fn print_tokens<R: Read>(name: &str, source: R) -> MonkeyResult<()> {
    println!("{} '{}':", "Tokens for".bold(), name);
    println!("{}", "=".repeat(60));

    let mut count = 0;
    for (i, token) in Lexer::new(source).enumerate() {
        let token = token?;
        println!(
            "{:4}: {:20} | {:?}",
            i,
            token.token_type.name().cyan(),
            token.literal
        );
        count += 1;
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", count);

    Ok(())
}

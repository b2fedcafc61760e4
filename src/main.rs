use std::{fs, path::PathBuf};

use clap::Parser;
use tora::{
    error::Error,
    interpreter::{lexer::tokenize, value::core::Value},
    run,
};

/// tora runs scripts written in TORA, a small dynamically typed scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to run.
    file: PathBuf,

    /// Prints the value of the script's last statement after it has run.
    #[arg(short, long)]
    print_result: bool,

    /// Prints the tokens of the script, one per line, instead of running it.
    #[arg(short, long)]
    tokens: bool,

    /// Logs function calls and other interpreter internals to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file.display());
        std::process::exit(1);
    });

    let result: Result<Option<Value>, Error> = if args.tokens {
        tokenize(&script).map(|tokens| {
                             for token in tokens {
                                 println!("{token}");
                             }
                             None
                         })
                         .map_err(Error::from)
    } else {
        run(&script)
    };

    match result {
        Ok(Some(value)) if args.print_result => println!("{value}"),
        Ok(_) => {},
        Err(e) => eprintln!("{} exception in '{}':\n{e}", e.category(), args.file.display()),
    }
}

use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use pratt::{Dialect, parse_with};
use tracing_subscriber::EnvFilter;

/// pratt evaluates arithmetic expressions with a binding-power parser.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pratt to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Operator set to accept.
    #[arg(short, long, value_enum, default_value_t = Dialect::Full)]
    dialect: Dialect,

    /// Increase logging verbosity (-v: debug, -vv+: trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or the path of the file holding it.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                 EnvFilter::new(directive_for_verbosity(args.verbose))
                             }))
                             .with_writer(std::io::stderr)
                             .init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match parse_with(&source, args.dialect) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "pratt=warn",
        1 => "pratt=debug",
        _ => "pratt=trace",
    }
}

use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use exprcalc::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TREE_DEPTH, ParseOptions, TrailingInput, run_lines};
use tracing::Level;

/// exprcalc evaluates arithmetic expressions such as `2 * (3 + 4)`.
///
/// Every non-blank line of input is evaluated on its own and printed as
/// `<input> = <result>`, or `Error: <message>` when it fails.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprcalc to read expressions from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Reject input left over after a complete expression instead of
    /// ignoring it.
    #[arg(short, long)]
    strict: bool,

    /// Maximum nesting of parentheses and negations.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum height of a parsed expression, counting every operator in a
    /// chain such as `1 + 1 + 1`.
    #[arg(long, default_value_t = DEFAULT_MAX_TREE_DEPTH)]
    max_tree_depth: usize,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// An expression, or a path with `--file`. Reads stdin when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();

    let script = match (args.file, args.contents) {
        (true, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|_| {
                                  eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                  std::process::exit(1);
                              }),
        (false, Some(expression)) => expression,
        (_, None) => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read standard input: {e}");
                return ExitCode::FAILURE;
            }
            buf
        },
    };

    let options = ParseOptions { trailing_input: if args.strict {
                                     TrailingInput::Reject
                                 } else {
                                     TrailingInput::Ignore
                                 },
                                 max_depth:      args.max_depth,
                                 max_tree_depth: args.max_tree_depth, };

    match run_lines(&script, options, &mut io::stdout().lock()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            tracing::debug!(failures, "some expressions failed");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            ExitCode::FAILURE
        },
    }
}

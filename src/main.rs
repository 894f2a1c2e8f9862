use std::{
    fs::File,
    io::{self, BufReader},
    process,
};

use clap::Parser;
use forklang::repl::{self, Options};

/// Fork is a small expression language. Without arguments an interactive
/// session reads lines from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fork to treat the contents as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Suppresses the banner and prompt of an interactive session.
    #[arg(short, long)]
    quiet: bool,

    /// Prints the tokens of each line instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Log filter, such as `debug` or `forklang::interpreter::parser=trace`.
    #[arg(long, env = "LOGLEVEL", default_value = "warn")]
    log_level: String,

    /// Source to run, one statement list per line.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().parse_filters(&args.log_level).init();
    log::debug!("starting with {args:?}");

    let options = Options { interactive: args.contents.is_none() && !args.quiet,
                            dump_tokens: args.tokens, };

    let mut stdout = io::stdout().lock();
    let result = match args.contents {
        None => repl::start(io::stdin().lock(), &mut stdout, options),
        Some(path) if args.file => {
            let file = File::open(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                process::exit(1);
            });
            repl::start(BufReader::new(file), &mut stdout, options)
        },
        Some(source) => repl::start(source.as_bytes(), &mut stdout, options),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

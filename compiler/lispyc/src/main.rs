//! Lispy CLI
//!
//! Interactive prefix-notation calculator.

use std::io::{self, Write};

use lispyc::config::VERSION;
use lispyc::{init_tracing, run_eval, run_parse, run_repl, Command, Invocation, ReplConfig};
use tracing::debug;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match Invocation::from_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };
    let config = ReplConfig::for_invocation(&invocation);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = match &invocation.command {
        Command::Help => {
            print_usage();
            Ok(true)
        }
        Command::Version => writeln!(out, "lispy {VERSION}").map(|()| true),
        Command::Eval(source) => run_eval(&config, source, &mut out, &mut err),
        Command::Parse(source) => run_parse(&config, source, &mut out, &mut err),
        Command::Repl => {
            run_repl(&config, io::stdin().lock(), &mut out, &mut err).map(|stats| {
                debug!(evaluated = stats.evaluated, rejected = stats.rejected, "session ended");
                true
            })
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        // Closed pipe on the other end; nothing left to report to.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lispy {VERSION} - prefix arithmetic calculator");
    println!();
    println!("Usage: lispy [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)              Start the interactive prompt");
    println!("  eval <expr>         Evaluate one expression and print the result");
    println!("  parse <expr>        Print the parse tree of one expression");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --no-color          Plain diagnostics (also: NO_COLOR=1)");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
    println!();
    println!("Examples:");
    println!("  lispy eval '(+ 1 2)'");
    println!("  lispy eval '* 10 (/ 9 3)'");
    println!();
    println!("Logging: LISPY_LOG=lispy_eval=trace (falls back to RUST_LOG)");
}

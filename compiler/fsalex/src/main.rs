//! fsalex CLI
//!
//! Identifier scanner front end.

use fsalex::commands::{lex, parse_lex_args, run_demo};
use fsalex::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut stdout = std::io::stdout().lock();

    let Some(command) = args.get(1) else {
        exit_on_error(run_demo(&mut stdout), None);
        return;
    };

    match command.as_str() {
        "lex" => {
            let result = parse_lex_args(&args[2..]).and_then(|request| lex(&request, &mut stdout));
            exit_on_error(result, Some(LEX_USAGE));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("fsalex {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

const LEX_USAGE: &str = "Usage: fsalex lex [--skip-unknown] [--spans] (<file> | -e <text>)";

/// Print `err` and exit with its code. Usage errors also print `usage`.
fn exit_on_error<T>(result: Result<T, CliError>, usage: Option<&str>) {
    let Err(err) = result else {
        return;
    };
    eprintln!("error: {err}");
    if let (CliError::Usage(_), Some(usage)) = (&err, usage) {
        eprintln!("{usage}");
    }
    std::process::exit(err.exit_code());
}

fn print_usage() {
    println!("fsalex: finite-state identifier scanner");
    println!();
    println!("Usage: fsalex [command] [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Scan a file and print its tokens");
    println!("  lex -e <text>        Scan inline text");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("With no command, scans the demo input \"int val1 = 1;\".");
    println!();
    println!("Lex options:");
    println!("  --skip-unknown       Drop characters that cannot start a token");
    println!("  --spans              Print the byte span of every token");
    println!();
    println!("Output: one '<kind code>, <text>' line per token.");
    println!("Set RUST_LOG=fsalex_core=trace to follow the automaton.");
}

//! Arith CLI.

mod commands;

use commands::{explain_error, lex_file, parse_file, run_program};

fn main() {
    arithc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: arith run <file|-> [options]");
                eprintln!();
                print_run_options();
                std::process::exit(1);
            }
            run_program(&args[2..]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: arith parse <file|->");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: arith lex <file|->");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: arith explain <ERROR_CODE>");
                eprintln!("Example: arith explain E6001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Arith {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare program path runs it with default options.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("arith"))
            {
                run_program(&args[1..]);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Arith, an evaluator for line-oriented arithmetic programs");
    println!();
    println!("Usage: arith <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file|->         Run a program and print its result");
    println!("  parse <file|->       Print the parse tree of every line");
    println!("  lex <file|->         Print the tokens of every line");
    println!("  explain <code>       Explain an error code (e.g., E6001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --float, -f          Evaluate with floating point numbers");
    println!("  --set name=expr      Bind a variable before the program runs");
    println!("  --env                Print every binding after the run");
    println!("  --color=<mode>       Diagnostics color: auto, always, never");
    println!();
    println!("Examples:");
    println!("  arith run prog.arith");
    println!("  arith run prog.arith --set b=3 --env");
    println!("  echo 'return 7 / 2' | arith run - --float");
    println!("  RUST_LOG=arith_eval=trace arith run prog.arith");
}

fn print_run_options() {
    eprintln!("Options:");
    eprintln!("  --float, -f          Evaluate with floating point numbers");
    eprintln!("  --set name=expr      Bind a variable before the program runs");
    eprintln!("  --env                Print every binding after the run");
    eprintln!("  --color=<mode>       Diagnostics color: auto, always, never");
}

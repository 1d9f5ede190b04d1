//! pyl lexer CLI
//!
//! Dumps or checks the token stream of a pyl source file.

use pylc::commands::{check_file, lex_file, parse_lex_options, EXIT_FAILURE};

fn main() {
    pylc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "check" => {
            let options = match parse_lex_options(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!("Usage: pylc {command} <file> [options]");
                    std::process::exit(EXIT_FAILURE);
                }
            };
            let status = if command == "lex" {
                lex_file(&options)
            } else {
                check_file(&options)
            };
            std::process::exit(status);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("pylc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn print_usage() {
    println!("pyl lexer debug tool");
    println!();
    println!("Usage: pylc <command> <file> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display tokens, then errors");
    println!("  check <file>         Tokenize and report lexical errors only");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --emit-comments      Include # comments in the token stream");
    println!("  --single-pop         Close at most one block per dedented line");
    println!("  --close-blocks       Emit DEDENTs for open blocks at end of input");
    println!("  --tab-width=<n>      Indentation width of a tab (default: 4)");
    println!();
    println!("Exit status:");
    println!("  0  no lexical errors");
    println!("  1  lexical errors were reported");
    println!("  2  bad arguments or unreadable file");
    println!();
    println!("Examples:");
    println!("  pylc lex main.pyl");
    println!("  pylc lex main.pyl --emit-comments --close-blocks");
    println!("  pylc check main.pyl --tab-width=8");
    println!("  RUST_LOG=pyl_lexer=trace pylc lex main.pyl   # Trace indentation");
}

//! `lex` and `check`: run the lexer over one file and report the result.

use std::io::{self, Write};

use pyl_lexer::{LexError, Lexer, LexerConfig};

use super::{read_file, LexOptions, EXIT_FAILURE, EXIT_LEX_ERRORS, EXIT_OK};

/// Write one `line:column KIND "lexeme"` line per token, END_OF_FILE
/// included, and return the errors the lexer recorded.
pub fn write_tokens<W: Write>(
    out: &mut W,
    source: &str,
    config: LexerConfig,
) -> io::Result<Vec<LexError>> {
    let mut lexer = Lexer::with_config(source, config);
    let mut count = 0usize;
    for token in lexer.by_ref() {
        writeln!(out, "{token}")?;
        count += 1;
    }
    tracing::debug!(tokens = count, errors = lexer.errors().len(), "token dump complete");
    Ok(lexer.errors().to_vec())
}

/// Write one `error: <message>` line per lexical error.
pub fn write_errors<W: Write>(out: &mut W, errors: &[LexError]) -> io::Result<()> {
    for error in errors {
        writeln!(out, "error: {error}")?;
    }
    Ok(())
}

/// Print the token stream for a file, then its errors. Returns the exit
/// status.
pub fn lex_file(options: &LexOptions) -> i32 {
    let source = match read_file(&options.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };

    let errors = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match write_tokens(&mut out, &source, options.config) {
            Ok(errors) => errors,
            Err(e) => {
                eprintln!("error: cannot write token stream: {e}");
                return EXIT_FAILURE;
            }
        }
    };

    report(&options.path, &errors)
}

/// Lex a file and report only its errors. Returns the exit status.
pub fn check_file(options: &LexOptions) -> i32 {
    let source = match read_file(&options.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };

    let mut lexer = Lexer::with_config(&source, options.config);
    for _ in lexer.by_ref() {}
    let errors = lexer.errors();

    if errors.is_empty() {
        println!("{}: no lexical errors", options.path);
    }
    report(&options.path, errors)
}

fn report(path: &str, errors: &[LexError]) -> i32 {
    if errors.is_empty() {
        return EXIT_OK;
    }

    if let Err(e) = write_errors(&mut io::stderr().lock(), errors) {
        tracing::warn!(%e, "failed to write diagnostics");
    }
    let plural = if errors.len() == 1 { "" } else { "s" };
    eprintln!("{path}: {} lexical error{plural}", errors.len());
    EXIT_LEX_ERRORS
}

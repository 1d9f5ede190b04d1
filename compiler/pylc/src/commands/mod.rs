//! Command handlers for the `pylc` CLI.
//!
//! Shared pieces (option parsing, `read_file`, exit statuses) live here in
//! the module root; the `lex` and `check` commands live in `lex.rs`.

use std::io::ErrorKind;

use pyl_lexer::{DedentPolicy, LexerConfig};

mod lex;

pub use lex::{check_file, lex_file, write_errors, write_tokens};

/// The input lexed without errors.
pub const EXIT_OK: i32 = 0;
/// At least one lexical error was reported.
pub const EXIT_LEX_ERRORS: i32 = 1;
/// The command could not run: bad arguments or an unreadable file.
pub const EXIT_FAILURE: i32 = 2;

/// Failures that stop a command before any lexing happens.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {message}")]
    Read { path: String, message: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid tab width '{0}' (expected a positive integer)")]
    InvalidTabWidth(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("missing file path")]
    MissingPath,
}

/// Options shared by `lex` and `check`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOptions {
    pub path: String,
    pub config: LexerConfig,
}

/// Parse the arguments following the command name.
///
/// Flags may appear before or after the file path. Exactly one path is
/// required.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut path: Option<&str> = None;
    let mut config = LexerConfig::new();

    for arg in args {
        if arg == "--emit-comments" {
            config = config.with_comments(true);
        } else if arg == "--single-pop" {
            config = config.with_dedent_policy(DedentPolicy::SinglePop);
        } else if arg == "--close-blocks" {
            config = config.with_close_blocks_at_eof(true);
        } else if let Some(width) = arg.strip_prefix("--tab-width=") {
            config = config.with_tab_width(parse_tab_width(width)?);
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg);
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(CliError::MissingPath)?;
    Ok(LexOptions {
        path: path.to_string(),
        config,
    })
}

fn parse_tab_width(text: &str) -> Result<u32, CliError> {
    match text.parse::<u32>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(CliError::InvalidTabWidth(text.to_string())),
    }
}

/// Read a source file, mapping I/O failures to user-facing messages.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::NotFound(path.to_string()),
        ErrorKind::PermissionDenied => CliError::PermissionDenied(path.to_string()),
        ErrorKind::InvalidData => CliError::InvalidUtf8(path.to_string()),
        _ => CliError::Read {
            path: path.to_string(),
            message: e.to_string(),
        },
    })
}

#[cfg(test)]
mod tests;

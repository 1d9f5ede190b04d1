use pretty_assertions::assert_eq;
use pyl_lexer::{DedentPolicy, LexErrorKind, LexerConfig};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

// === Option parsing ===

#[test]
fn path_only_uses_default_config() {
    let options = parse_lex_options(&args(&["main.pyl"])).unwrap();
    assert_eq!(
        options,
        LexOptions {
            path: "main.pyl".to_string(),
            config: LexerConfig::default(),
        }
    );
}

#[test]
fn flags_before_and_after_path() {
    let options = parse_lex_options(&args(&[
        "--single-pop",
        "main.pyl",
        "--emit-comments",
        "--close-blocks",
        "--tab-width=8",
    ]))
    .unwrap();
    assert_eq!(options.path, "main.pyl");
    assert_eq!(
        options.config,
        LexerConfig::new()
            .with_dedent_policy(DedentPolicy::SinglePop)
            .with_comments(true)
            .with_close_blocks_at_eof(true)
            .with_tab_width(8)
    );
}

#[test]
fn missing_path() {
    assert_eq!(
        parse_lex_options(&args(&["--emit-comments"])),
        Err(CliError::MissingPath)
    );
}

#[test]
fn unknown_option() {
    assert_eq!(
        parse_lex_options(&args(&["a.pyl", "--fast"])),
        Err(CliError::UnknownOption("--fast".to_string()))
    );
}

#[test]
fn second_path_is_rejected() {
    assert_eq!(
        parse_lex_options(&args(&["a.pyl", "b.pyl"])),
        Err(CliError::UnexpectedArgument("b.pyl".to_string()))
    );
}

#[test]
fn tab_width_must_be_positive() {
    for bad in ["0", "-2", "four", ""] {
        let flag = format!("--tab-width={bad}");
        assert_eq!(
            parse_lex_options(&args(&["a.pyl", &flag])),
            Err(CliError::InvalidTabWidth(bad.to_string()))
        );
    }
}

// === Reading files ===

#[test]
fn read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.pyl");
    let path = path.to_str().unwrap();
    let err = read_file(path).unwrap_err();
    assert_eq!(err, CliError::NotFound(path.to_string()));
    assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
}

#[test]
fn read_non_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.pyl");
    std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
    let path = path.to_str().unwrap();
    assert_eq!(read_file(path), Err(CliError::InvalidUtf8(path.to_string())));
}

#[test]
fn read_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ok.pyl");
    std::fs::write(&path, "x = 1\n").unwrap();
    assert_eq!(read_file(path.to_str().unwrap()).unwrap(), "x = 1\n");
}

// === Output ===

#[test]
fn token_dump_format() {
    let mut out = Vec::new();
    let errors = write_tokens(&mut out, "if x:\n    y = 'hi'\n", LexerConfig::default()).unwrap();
    assert!(errors.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\
1:1 IF \"if\"
1:4 IDENTIFIER \"x\"
1:5 COLON \":\"
1:6 NEWLINE \"\\n\"
2:1 INDENT \"\"
2:5 IDENTIFIER \"y\"
2:7 ASSIGN \"=\"
2:9 STRING \"hi\"
2:13 NEWLINE \"\\n\"
3:1 END_OF_FILE \"\"
"
    );
}

#[test]
fn token_dump_returns_errors_in_order() {
    let mut out = Vec::new();
    let errors = write_tokens(&mut out, "! 1.2.3", LexerConfig::default()).unwrap();
    let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            LexErrorKind::MalformedNegation,
            LexErrorKind::InvalidNumberFormat,
        ]
    );
}

#[test]
fn error_lines_are_prefixed() {
    let mut tokens = Vec::new();
    let errors = write_tokens(&mut tokens, "$", LexerConfig::default()).unwrap();
    let mut out = Vec::new();
    write_errors(&mut out, &errors).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "error: Line 1, Column 1: Unexpected character: $\n"
    );
}

// === Exit status ===

#[test]
fn check_file_exit_statuses() {
    let dir = tempfile::tempdir().unwrap();
    let clean = dir.path().join("clean.pyl");
    let broken = dir.path().join("broken.pyl");
    std::fs::write(&clean, "def f(a):\n    return a\n").unwrap();
    std::fs::write(&broken, "x = 'open\n").unwrap();

    let options = |path: &std::path::Path| LexOptions {
        path: path.to_str().unwrap().to_string(),
        config: LexerConfig::default(),
    };
    assert_eq!(check_file(&options(&clean)), EXIT_OK);
    assert_eq!(check_file(&options(&broken)), EXIT_LEX_ERRORS);
    assert_eq!(
        check_file(&options(&dir.path().join("missing.pyl"))),
        EXIT_FAILURE
    );
}

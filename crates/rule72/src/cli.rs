#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Environment variables provide defaults that explicit flags
//! override.

use std::env;
use std::path::PathBuf;
use std::process;

use r72_i18n::Lang;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
rule72 — Rule of 72 calculator for the terminal

USAGE:
    rule72 [OPTIONS]

OPTIONS:
    --lang=CODE       Starting language: 'en' or 'np' (default: en;
                      unknown codes fall back to en)
    --log-file=PATH   Append structured JSON logs to PATH
    --help, -h        Show this help message
    --version, -V     Show version

KEYBINDINGS:
    Tab / Shift+Tab   Move focus between fields, button, and languages
    Enter             Calculate
    Left / Right      Switch language (on the language bar)
    Esc / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    RULE72_LANG       Override the starting language
    RULE72_LOG_FILE   Override --log-file
    RULE72_LOG        Log filter when a log file is set (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, Default)]
pub struct Opts {
    /// Starting display language.
    pub lang: Lang,
    /// JSON log sink; logging stays off without one.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    UnknownArg(String),
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Prints help or version and exits when asked to; exits nonzero on
    /// an argument it does not know.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("rule72 {VERSION}");
                process::exit(0);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment defaults first, flags override below.
        if let Some(val) = get_env("RULE72_LANG") {
            opts.lang = Lang::from_code(&val).unwrap_or_default();
        }
        if let Some(val) = get_env("RULE72_LOG_FILE")
            && !val.trim().is_empty()
        {
            opts.log_file = Some(PathBuf::from(val));
        }

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--lang=") {
                        // An unrecognized code means English, same as the
                        // locale lookup everywhere else.
                        opts.lang = Lang::from_code(val).unwrap_or_default();
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        if !val.trim().is_empty() {
                            opts.log_file = Some(PathBuf::from(val));
                        }
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }
}

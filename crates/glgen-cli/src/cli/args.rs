//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input file (positional, stdin when omitted or "-").
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Input file (stdin when omitted or \"-\")")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (stdout when omitted)")
}

/// Variable name used in conversion expressions (--var).
pub fn var_arg() -> Arg {
    Arg::new("var")
        .long("var")
        .value_name("NAME")
        .default_value("x")
        .help("Variable name used in conversion expressions")
}

/// Fail on types without a mapping (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Exit with an error when a type has no target mapping")
}

/// Identifiers to normalize (positional, one or more).
pub fn names_arg() -> Arg {
    Arg::new("names")
        .value_name("NAME")
        .num_args(1..)
        .required(true)
        .help("Function or constant names")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug)")
}

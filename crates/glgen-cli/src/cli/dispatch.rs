//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::strip::StripArgs;
use crate::commands::trim::TrimArgs;
use crate::commands::types::TypesArgs;

pub struct TypesParams {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub var: String,
    pub strict: bool,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            var: m
                .get_one::<String>("var")
                .cloned()
                .unwrap_or_else(|| "x".to_string()),
            strict: m.get_flag("strict"),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            var: p.var,
            strict: p.strict,
        }
    }
}

pub struct TrimParams {
    pub names: Vec<String>,
}

impl TrimParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            names: m
                .get_many::<String>("names")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<TrimParams> for TrimArgs {
    fn from(p: TrimParams) -> Self {
        Self { names: p.names }
    }
}

pub struct StripParams {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl StripParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<StripParams> for StripArgs {
    fn from(p: StripParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
        }
    }
}

/// Log verbosity requested with `-v`.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

mod cli;
mod commands;
mod error;
mod logging;

use cli::{StripParams, TrimParams, TypesParams, build_cli, verbosity};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };

    logging::init(verbosity(m));

    let result = match name {
        "types" => commands::types::run(TypesParams::from_matches(m).into()),
        "trim" => commands::trim::run(TrimParams::from_matches(m).into()),
        "strip" => commands::strip::run(StripParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

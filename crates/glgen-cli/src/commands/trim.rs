use std::io::{self, Write};

use glgen_core::{BlankLineStrippingWriter, trim_api_prefix};

use super::stream::open_output;
use crate::error::CliError;

pub struct TrimArgs {
    pub names: Vec<String>,
}

pub fn run(args: TrimArgs) -> Result<(), CliError> {
    let mut out = BlankLineStrippingWriter::new(open_output(None)?);
    write_trimmed(&mut out, &args.names)?;
    out.finish()?;
    Ok(())
}

pub fn write_trimmed<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", trim_api_prefix(name))?;
    }
    Ok(())
}

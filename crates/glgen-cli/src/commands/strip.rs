use std::io;
use std::path::PathBuf;

use glgen_core::BlankLineStrippingWriter;
use tracing::debug;

use super::stream::{open_input, open_output};
use crate::error::CliError;

pub struct StripArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn run(args: StripArgs) -> Result<(), CliError> {
    let mut input = open_input(args.input.as_deref())?;
    let mut out = BlankLineStrippingWriter::new(open_output(args.output.as_deref())?);

    let copied = io::copy(&mut input, &mut out)?;
    debug!(bytes = copied, "stripped input");

    out.finish()?;
    Ok(())
}

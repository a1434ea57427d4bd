use std::io::{self, Write};
use std::path::PathBuf;

use glgen_core::{
    BlankLineStrippingWriter, TypeDescriptor, classify, target_type, to_native, to_target,
};
use tracing::{info, warn};

use super::stream::{open_input, open_output};
use crate::error::CliError;

pub struct TypesArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub var: String,
    pub strict: bool,
}

pub fn run(args: TypesArgs) -> Result<(), CliError> {
    let input = open_input(args.input.as_deref())?;
    let descriptors: Vec<TypeDescriptor> = serde_json::from_reader(input)?;
    info!(count = descriptors.len(), "loaded type descriptors");

    // Strict runs fail before the output is opened, so no partial file is left.
    if args.strict {
        let unmapped = descriptors
            .iter()
            .filter(|d| is_unmapped(d))
            .inspect(|d| warn!(descriptor = %d, "no target mapping"))
            .count();
        if unmapped > 0 {
            return Err(CliError::Unmapped(unmapped));
        }
    }

    let mut out = BlankLineStrippingWriter::new(open_output(args.output.as_deref())?);
    write_types(&mut out, &descriptors, &args.var)?;
    out.finish()?;
    Ok(())
}

fn is_unmapped(descriptor: &TypeDescriptor) -> bool {
    !descriptor.is_void() && !classify(descriptor).is_mapped()
}

/// Write one tab-separated line per descriptor: descriptor, target type,
/// native → target and target → native expressions.
///
/// Returns the number of descriptors without a target mapping.
pub fn write_types<W: Write>(
    out: &mut W,
    descriptors: &[TypeDescriptor],
    var: &str,
) -> io::Result<usize> {
    let mut unmapped = 0;

    for descriptor in descriptors {
        if descriptor.is_void() {
            writeln!(out, "{descriptor}\t-\t-\t-")?;
            continue;
        }

        if is_unmapped(descriptor) {
            warn!(%descriptor, "no target mapping, falling back to native type");
            unmapped += 1;
        }

        writeln!(
            out,
            "{descriptor}\t{}\t{}\t{}",
            target_type(descriptor).unwrap_or_else(|| "-".to_string()),
            to_target(descriptor, var),
            to_native(descriptor, var),
        )?;
    }

    Ok(unmapped)
}

//! Command builders for the CLI.

use clap::{Command, crate_version};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("glgen")
        .about("Inspect GL type mappings and clean generated binding sources")
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(types_command())
        .subcommand(trim_command())
        .subcommand(strip_command())
}

/// Map type descriptors to target types and conversions.
pub fn types_command() -> Command {
    Command::new("types")
        .about("Show target types and conversions for type descriptors")
        .after_help(
            r#"INPUT:
  A JSON array of descriptors:
  [{"name": "GLfloat", "pointer_depth": 1, "raw_declaration": "const GLfloat *"}]

EXAMPLES:
  glgen types params.json
  glgen types params.json --var data --strict
  cat params.json | glgen types -"#,
        )
        .arg(input_arg())
        .arg(output_file_arg())
        .arg(var_arg())
        .arg(strict_arg())
}

/// Strip API prefixes from identifiers.
pub fn trim_command() -> Command {
    Command::new("trim")
        .about("Strip API-family prefixes from identifiers")
        .after_help(
            r#"EXAMPLES:
  glgen trim glDrawArrays GL_TEXTURE_2D   # DrawArrays, TEXTURE_2D
  glgen trim gl3wInit                     # unchanged"#,
        )
        .arg(names_arg())
}

/// Remove blank lines from generated source.
pub fn strip_command() -> Command {
    Command::new("strip")
        .about("Remove blank lines from generated source")
        .after_help(
            r#"EXAMPLES:
  glgen strip package.go -o package.go.tmp
  generate | glgen strip > package.go"#,
        )
        .arg(input_arg())
        .arg(output_file_arg())
}

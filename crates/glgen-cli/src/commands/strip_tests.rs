use std::fs;

use super::strip::{StripArgs, run};
use crate::error::CliError;

#[test]
fn strips_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("package.go");
    let output = dir.path().join("clean.go");
    fs::write(
        &input,
        "\n\npackage gl\n\n\n// #include \"gl.h\"\nimport \"C\"\n\n\nconst TRUE = 1",
    )
    .unwrap();

    run(StripArgs {
        input: Some(input),
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "package gl\n// #include \"gl.h\"\nimport \"C\"\nconst TRUE = 1\n"
    );
}

#[test]
fn empty_input_gives_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.go");
    let output = dir.path().join("clean.go");
    fs::write(&input, "\n\n\n").unwrap();

    run(StripArgs {
        input: Some(input),
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(fs::read(output).unwrap(), b"");
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("package.go");
    fs::write(&input, "package gl\n").unwrap();

    let err = run(StripArgs {
        input: Some(input),
        output: Some(dir.path().join("no-such-dir").join("clean.go")),
    })
    .unwrap_err();

    assert!(matches!(err, CliError::Create { .. }));
}

use std::fs;

use tempfile::tempdir;

use lnnzhyz::{Language, LnnzhyzError};
use lnnzhyz_cli::{Args, OutputFormat, run};

fn args(input: &str, output: &str, format: OutputFormat) -> Args {
    Args {
        input: input.to_string(),
        language: None,
        output: output.to_string(),
        format,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn smoke_test_svg_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("text.txt");
    let output = temp_dir.path().join("text.svg");
    fs::write(&input, "^zhung1_hua2 ni3_hau3\n").unwrap();

    run(&args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        OutputFormat::Svg,
    ))
    .expect("Failed to render text");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"), "{svg}");
    assert!(svg.contains("<path"), "{svg}");
    assert!(svg.contains("</svg>"), "{svg}");
}

#[test]
fn smoke_test_shidinn_path_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("text.txt");
    let output = temp_dir.path().join("text.d");
    fs::write(&input, "Vnu8_AHL ^xdi8_aho").unwrap();

    let mut args = args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        OutputFormat::Path,
    );
    args.language = Some(Language::Shidinn);
    run(&args).expect("Failed to draw text");

    let d = fs::read_to_string(&output).unwrap();
    assert!(d.starts_with('M'), "{d}");
    assert!(!d.contains('<'), "{d}");
}

#[test]
fn smoke_test_notation_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("text.txt");
    let output = temp_dir.path().join("text.notation");
    fs::write(&input, "ni3_hau3").unwrap();

    run(&args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        OutputFormat::Notation,
    ))
    .expect("Failed to serialize text");

    let notation = fs::read_to_string(&output).unwrap();
    let decoded = lnnzhyz::notation::deserialize_text(&notation).unwrap();
    assert_eq!(decoded, lnnzhyz_parser::compile_mandarin("ni3_hau3").unwrap());
}

#[test]
fn smoke_test_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("text.txt");
    let output = temp_dir.path().join("text.svg");
    let config = temp_dir.path().join("config.toml");
    fs::write(&input, "xd8").unwrap();
    fs::write(
        &config,
        "[draw]\nstroke_width = 1.5\n\n[input]\nlanguage = \"shidinn\"\n",
    )
    .unwrap();

    let mut args = args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        OutputFormat::Svg,
    );
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).expect("Failed to render text");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"stroke-width="1.5""#), "{svg}");
}

#[test]
fn smoke_test_invalid_text_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("text.txt");
    let output = temp_dir.path().join("text.svg");
    fs::write(&input, "ni3 xyz").unwrap();

    let err = run(&args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        OutputFormat::Svg,
    ))
    .unwrap_err();

    assert!(matches!(err, LnnzhyzError::Compile { .. }), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn smoke_test_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("text.svg");

    let err = run(&args(
        "does/not/exist.txt",
        &output.to_string_lossy(),
        OutputFormat::Svg,
    ))
    .unwrap_err();
    assert!(matches!(err, LnnzhyzError::Io(_)), "{err:?}");
}

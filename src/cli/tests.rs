//! Unit tests for CLI commands

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::cli::{generate, props_table, run_cli, Cli, Commands, OutputFormat};
use crate::naming::ExtractedProp;
use crate::linter::ValidationFailed;
use clap::Parser;
use std::io::Write;

#[test]
fn test_validate_command_with_flags() {
    let cli = Cli::try_parse_from([
        "component-builder",
        "validate",
        "--file",
        "button.tsx",
        "--strict",
        "--type",
        "button",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Validate {
            file,
            strict,
            component_type,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(file.to_string_lossy(), "button.tsx");
            assert!(strict);
            assert_eq!(component_type.as_deref(), Some("button"));
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_generate_defaults_to_json() {
    let cli = Cli::try_parse_from(["component-builder", "generate", "--spec", "c.json"]).unwrap();
    match cli.command {
        Commands::Generate { format, output, .. } => {
            assert_eq!(format, OutputFormat::Json);
            assert!(output.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_global_log_level() {
    let cli = Cli::try_parse_from(["component-builder", "types", "--log-level", "debug"]).unwrap();
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
    assert!(matches!(cli.command, Commands::Types));
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["component-builder", "generate", "--spec", "c.yaml", "--format", "markdown"],
        vec!["component-builder", "validate", "--file", "x.tsx"],
        vec!["component-builder", "types"],
        vec!["component-builder", "template", "button", "--variant", "outline"],
        vec!["component-builder", "examples", "modal", "--advanced"],
        vec!["component-builder", "serve", "--addr", "127.0.0.1:3001"],
        vec!["component-builder", "mcp"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["component-builder", "generate", "--spec", "c.json", "--format", "xml"]).is_err());
}

#[test]
fn test_generate_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "name: SubmitButton\ntype: button\nvariant: default").unwrap();

    let json = generate(file.path(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "SubmitButton");

    let markdown = generate(file.path(), OutputFormat::Markdown).unwrap();
    assert!(markdown.starts_with("# Generated Component: SubmitButton"));
}

#[test]
fn test_generate_rejects_unknown_type() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"name": "Menu", "type": "dropdown"}}"#).unwrap();

    let err = generate(file.path(), OutputFormat::Json).unwrap_err();
    assert_eq!(err.to_string(), "Unknown component type: dropdown");
}

#[test]
fn test_validate_fail_on_error_returns_error() {
    let mut file = tempfile::NamedTempFile::with_suffix(".tsx").unwrap();
    writeln!(file, "const x = 1").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let validate_cli = |extra: &[&str]| {
        let mut args = vec!["component-builder", "validate", "--file", path.as_str()];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    };

    let err = run_cli(validate_cli(&["--fail-on-error"])).unwrap_err();
    let failed = err.downcast_ref::<ValidationFailed>().expect("validation failure");
    assert_eq!(failed.errors, 2);

    assert!(run_cli(validate_cli(&[])).is_ok());
}

#[test]
fn test_generate_rejects_invalid_component_name() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"name": "react", "type": "button"}}"#).unwrap();
    let err = generate(file.path(), OutputFormat::Json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid component name \"react\": \"React\" is a reserved word"
    );

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"name": "My$Button", "type": "button"}}"#).unwrap();
    let err = generate(file.path(), OutputFormat::Json).unwrap_err();
    assert!(err.to_string().ends_with("Component name must contain only letters and numbers"));
}

#[test]
fn test_props_command_and_table() {
    let cli = Cli::try_parse_from(["component-builder", "props", "--file", "button.tsx"]).unwrap();
    assert!(matches!(cli.command, Commands::Props { .. }));

    let props = vec![
        ExtractedProp {
            name: "variant".into(),
            prop_type: "\"default\" | \"ghost\"".into(),
            required: false,
        },
        ExtractedProp {
            name: "onClick".into(),
            prop_type: "React.MouseEvent".into(),
            required: true,
        },
    ];
    assert_eq!(
        props_table(&props),
        "| Prop | Type | Required |\n|------|------|----------|\n\
         | variant | `string` | no |\n\
         | onClick | `React.MouseEvent` | yes |\n"
    );
    assert_eq!(props_table(&[]), "No props interface found\n");
}

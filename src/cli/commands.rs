use crate::config::ServiceConfig;
use crate::generator::{
    describe_template, generate_examples_markdown, list_templates_markdown,
    render_generated_markdown, ComponentGenerator, GenerateError,
};
use crate::linter::{ensure_valid, print_validation_result, ComponentValidator};
use crate::naming::{extract_props_from_code, format_typescript_type, validate_component_name, ExtractedProp};
use crate::registry;
use crate::server::{AppService, HttpServer};
use crate::spec::{load_component_spec, load_validation_request};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for component-builder
///
/// Generates and validates shadcn-style React components, and hosts the
/// HTTP and stdio tool servers.
#[derive(Parser)]
#[command(name = "component-builder")]
#[command(about = "Shadcn-style React component generator and validator", long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides CBUILD_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a component from a JSON or YAML specification file
    Generate {
        /// Path to the component specification (JSON or YAML)
        #[arg(short, long)]
        spec: PathBuf,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Validate component source against the shadcn conventions
    Validate {
        /// Path to the component source file
        #[arg(short, long)]
        file: PathBuf,

        /// Run the strict checks as well
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Check against the pattern for this component type instead
        #[arg(long = "type")]
        component_type: Option<String>,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and suggestions)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// List the props declared by a component's `...Props` interface
    Props {
        /// Path to the component source file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// List the registered component types
    Types,
    /// Describe one component template
    Template {
        /// Component type, case-insensitive
        component_type: String,

        /// Variant to mark as selected
        #[arg(long)]
        variant: Option<String>,
    },
    /// Print usage examples for a component type
    Examples {
        /// Component type, case-insensitive
        component_type: String,

        /// Include the advanced snippets
        #[arg(long, default_value_t = false)]
        advanced: bool,
    },
    /// Run the HTTP service
    Serve {
        /// Address and port to bind; overrides the config file
        #[arg(long)]
        addr: Option<String>,

        /// Path to a YAML service configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the tool server on stdin/stdout
    Mcp,
}

/// Rendering for `generate`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The generated component as pretty JSON
    Json,
    /// The markdown report used by the tool server
    Markdown,
}

/// Execute a parsed command.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed, generation
/// fails, the output cannot be written, or the server fails to start. With
/// `validate --fail-on-error`, a result with errors is returned as
/// [`crate::linter::ValidationFailed`].
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            spec,
            output,
            format,
        } => {
            let rendered = generate(&spec, format)?;
            write_output(output.as_deref(), &rendered)
        }
        Commands::Validate {
            file,
            strict,
            component_type,
            fail_on_error,
            errors_only,
        } => {
            let request = load_validation_request(&file, strict)?;
            let validator = ComponentValidator::new();
            let result = match component_type.as_deref() {
                Some(t) => validator.validate_pattern(&request.component_code, t),
                None => validator.validate_component(&request.component_code, request.strict),
            };
            print_validation_result(&result, errors_only);
            if fail_on_error {
                ensure_valid(&result)?;
            }
            Ok(())
        }
        Commands::Props { file } => {
            let code = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            print!("{}", props_table(&extract_props_from_code(&code)));
            Ok(())
        }
        Commands::Types => {
            print!("{}", list_templates_markdown());
            Ok(())
        }
        Commands::Template {
            component_type,
            variant,
        } => {
            let entry = registry::get_template(&component_type)
                .ok_or_else(|| GenerateError::TemplateMissingForType(component_type.clone()))?;
            print!("{}", describe_template(entry, variant.as_deref()));
            Ok(())
        }
        Commands::Examples {
            component_type,
            advanced,
        } => {
            print!("{}", generate_examples_markdown(&component_type, advanced)?);
            Ok(())
        }
        Commands::Serve { addr, config } => serve(addr, config.as_deref()),
        Commands::Mcp => crate::mcp::serve_stdio().context("tool server failed"),
    }
}

/// Generate from a spec file and render it in `format`.
pub fn generate(spec_path: &Path, format: OutputFormat) -> anyhow::Result<String> {
    let spec = load_component_spec(spec_path)?;
    let check = validate_component_name(&spec.name);
    if let Some(error) = check.error {
        anyhow::bail!("Invalid component name {:?}: {error}", spec.name);
    }
    let component = ComponentGenerator::new().generate_component(&spec)?;
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&component)?,
        OutputFormat::Markdown => render_generated_markdown(&component),
    };
    Ok(rendered)
}

/// Markdown table of extracted props; unknown types are shown as `string`.
pub fn props_table(props: &[ExtractedProp]) -> String {
    if props.is_empty() {
        return "No props interface found\n".to_string();
    }
    let mut out = String::from("| Prop | Type | Required |\n|------|------|----------|\n");
    for prop in props {
        out.push_str(&format!(
            "| {} | `{}` | {} |\n",
            prop.name,
            format_typescript_type(&prop.prop_type),
            if prop.required { "yes" } else { "no" }
        ));
    }
    out
}

fn write_output(output: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("✅ Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn serve(addr: Option<String>, config: Option<&Path>) -> anyhow::Result<()> {
    let mut config = ServiceConfig::load(config)?;
    if let Some(addr) = addr {
        config.addr = addr;
    }
    may::config().set_stack_size(config.http.stack_size);

    let service = AppService::new(&config);
    let handle = HttpServer(service)
        .start(config.addr.as_str())
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!(
        addr = %handle.addr(),
        environment = %config.environment,
        auth = config.auth_enabled(),
        "component-builder listening"
    );
    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server coroutine panicked: {e:?}"))
}

//! # CLI Module
//!
//! Command-line front end for the generator, the validator and both servers.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate a component from a JSON or YAML specification:
//!
//! ```bash
//! component-builder generate --spec submit-button.yaml --format markdown
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Component specification (required); its `name` must
//!   pass component-name validation
//! - `--output <FILE>` - Write the result to a file instead of stdout
//! - `--format <json|markdown>` - Output rendering (default: json)
//!
//! ### `validate`
//!
//! Check component source against the shadcn conventions:
//!
//! ```bash
//! component-builder validate --file src/components/ui/button.tsx --strict --fail-on-error
//! ```
//!
//! `--type <t>` switches to the per-type pattern check.
//!
//! ### `props`
//!
//! List the members of a component's `...Props` interface:
//!
//! ```bash
//! component-builder props --file src/components/ui/button.tsx
//! ```
//!
//! ### `types`, `template`, `examples`
//!
//! Browse the template registry:
//!
//! ```bash
//! component-builder types
//! component-builder template button --variant outline
//! component-builder examples modal --advanced
//! ```
//!
//! ### `serve` and `mcp`
//!
//! ```bash
//! component-builder serve --config config/config.yaml --addr 127.0.0.1:3001
//! component-builder mcp
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use component_builder::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli)?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{generate, props_table, run_cli, Cli, Commands, OutputFormat};

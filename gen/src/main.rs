//! Quill Code Generator
//!
//! Generates a typed TypeScript client module from service definitions.

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use quill_definitions::status::define_status_service;
use quill_definitions::taskhub::define_taskhub_service;
use quill_gen::config::GenConfig;
use quill_gen::errors::GeneratorError;
use quill_gen::output::generate_and_write;

/// Quill code generator - transforms service definitions into typed
/// TypeScript clients
#[derive(Parser, Debug)]
#[command(name = "quill-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service definition to generate a client for (e.g. "taskhub")
    #[arg(short, long)]
    service: String,

    /// Output file for the generated module
    #[arg(short, long, default_value = "client/api.ts")]
    output: String,

    /// URL prefix to strip from generated function names
    #[arg(long)]
    omit_prefix: Option<String>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    if cli.verbose > 0 {
        eprintln!("Generating client for service: {}", cli.service);
        eprintln!("Output file: {}", cli.output);
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let service = match cli.service.as_str() {
        "taskhub" => define_taskhub_service(),
        "status" => define_status_service(),
        other => {
            return Err(GeneratorError::ConfigError(format!(
                "Unknown service: '{}'. Available services: taskhub, status",
                other
            )));
        }
    };

    if cli.verbose > 1 {
        eprintln!("Service: {} ({} routes)", service.name, service.routes.len());
        for route in &service.routes {
            eprintln!("  - {} {}", route.method, route.path);
        }
    }

    let mut config = GenConfig::new();
    if let Some(prefix) = cli.omit_prefix {
        config = config.omit_prefix(prefix);
    }

    let code = generate_and_write(&service, &config, Path::new(&cli.output), cli.dry_run)?;

    if !cli.dry_run && cli.verbose > 0 {
        eprintln!(
            "{} wrote {} ({} bytes)",
            "done".green().bold(),
            cli.output,
            code.len()
        );
    }

    Ok(())
}

#![deny(missing_docs)]

//! # Apidoc CLI
//!
//! Command Line Interface for the API console toolchain.
//!
//! Supported Commands:
//! - `validate`: Structural preflight of the OpenAPI document.
//! - `generate`: OpenAPI document -> docs model JSON for the web console.
//! - `fields`: Request-builder fields of one operation.
//! - `preview`: curl command for one operation.

use apidoc_core::AppResult;
use clap::{Parser, Subcommand};

mod args;
mod fields;
mod generate;
mod preview;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI docs model and request builder CLI")]
struct Cli {
    /// Enable debug logging (RUST_LOG is honoured as well).
    #[clap(long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Checks the OpenAPI document for required structure and routes.
    Validate(validate::ValidateArgs),
    /// Validates the document and writes the docs model JSON.
    Generate(generate::GenerateArgs),
    /// Prints the input fields for an operation's parameters.
    Fields(fields::FieldsArgs),
    /// Prints a curl command for an operation.
    Preview(preview::PreviewArgs),
}

fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        log::debug!("Command failed: {:?}", err);
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Validate(args) => validate::execute(args),
        Commands::Generate(args) => generate::execute(args),
        Commands::Fields(args) => fields::execute(args),
        Commands::Preview(args) => preview::execute(args),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

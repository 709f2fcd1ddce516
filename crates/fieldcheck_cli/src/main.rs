mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fieldcheck_core::DEFAULT_LANGUAGE;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for rule, input or translation defects.
const FATAL_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(version, about = "Field validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an input record against a rule document
    Validate {
        /// Path to the rule document (YAML, TOML or JSON)
        rules: String,

        /// Path to the input record (YAML, TOML or JSON)
        input: String,

        /// Locale for error messages
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Check values as given, without coercing them to the rule type
        #[arg(long)]
        no_convert: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Also print the input after coercion
        #[arg(long)]
        print_input: bool,
    },

    /// Check a rule document without validating any input
    Check {
        /// Path to the rule document (YAML, TOML or JSON)
        rules: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the built-in message locales
    Locales,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Validate {
            rules,
            input,
            language,
            no_convert,
            format,
            print_input,
        } => {
            let options = commands::validate::Options {
                language,
                convert: !no_convert,
                format,
                print_input,
            };
            let passed = commands::validate::execute(&rules, &input, &options)?;
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Check { rules, format } => {
            commands::check::execute(&rules, &format)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Locales => {
            commands::locales::execute();
            Ok(ExitCode::SUCCESS)
        }
    }
}

//! CNJ process-number CLI.
//!
//! Command-line front-end for the cnj library: masking, validation, field
//! extraction, check-digit calculation and scanning text for case numbers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cnj::{
    extract_cnj_info, format, CnjMatcher, CnjNumber, PatternMatcher, ProcessNumberValidator,
    ValidationPolicy,
};

/// CNJ Process-Number Tool
///
/// Format, validate and inspect Brazilian judicial process numbers
/// (NNNNNNN-DD.AAAA.J.TR.OOOO).
#[derive(Parser)]
#[command(name = "cnj")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the CNJ input mask to a digit string
    Format {
        /// Raw input; non-digits are ignored
        input: String,
    },

    /// Validate a process number (CNJ or free-form)
    Validate {
        /// Process number to validate
        input: String,

        /// Reject free-form references that are not CNJ numbers
        #[arg(long)]
        cnj_only: bool,
    },

    /// Show the fields of a valid CNJ number
    Info {
        /// Punctuated CNJ number
        input: String,
    },

    /// Compute check digits for a new CNJ number
    CheckDigits {
        /// Sequential number (7 digits)
        sequencial: String,
        /// Filing year (4 digits)
        ano: String,
        /// Judiciary segment (1 digit)
        segmento: String,
        /// Court (2 digits)
        tribunal: String,
        /// Originating unit (4 digits)
        origem: String,
    },

    /// Find CNJ numbers in a text file (or stdin)
    Scan {
        /// Input text file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Also list CNJ-shaped numbers with wrong check digits
        #[arg(long)]
        all: bool,
    },
}

/// Command handler holding output preferences.
struct CnjHandler {
    json: bool,
}

impl CnjHandler {
    fn new(json: bool) -> Self {
        Self { json }
    }

    fn format(&self, input: &str) -> Result<ExitCode> {
        let masked = format(input);
        if self.json {
            println!("{}", serde_json::json!({ "formatted": masked }));
        } else {
            println!("{}", masked);
        }
        Ok(ExitCode::SUCCESS)
    }

    fn validate(&self, input: &str, policy: ValidationPolicy) -> Result<ExitCode> {
        let validator = ProcessNumberValidator::new(policy);
        tracing::debug!(policy = ?validator.policy(), "validating process number");
        let result = validator.validate(input);

        if self.json {
            println!("{}", serde_json::to_string(&result)?);
        } else if result.is_valid {
            println!("✓ Valid ({})", result.kind);
        } else {
            println!(
                "✗ Invalid ({}): {}",
                result.kind,
                result.message.as_deref().unwrap_or_default()
            );
        }

        Ok(exit_status(result.is_valid))
    }

    fn info(&self, input: &str) -> Result<ExitCode> {
        let Some(info) = extract_cnj_info(input.trim()) else {
            if self.json {
                println!("null");
            } else {
                println!("✗ Not a valid CNJ number: {}", input);
            }
            return Ok(ExitCode::FAILURE);
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&info)?);
        } else {
            println!("Sequencial: {}", info.sequencial);
            println!("Dígitos:    {}", info.digitos);
            println!("Ano:        {}", info.ano);
            println!("Segmento:   {} ({})", info.segmento, info.segmento_nome);
            println!("Tribunal:   {}", info.tribunal);
            println!("Origem:     {}", info.origem);
        }
        Ok(ExitCode::SUCCESS)
    }

    fn check_digits(
        &self,
        sequencial: &str,
        ano: &str,
        segmento: &str,
        tribunal: &str,
        origem: &str,
    ) -> Result<ExitCode> {
        let number = CnjNumber::from_parts(sequencial, ano, segmento, tribunal, origem)
            .context("Cannot compute check digits")?;

        if self.json {
            println!(
                "{}",
                serde_json::json!({ "digitos": number.digitos(), "numero": number.to_string() })
            );
        } else {
            println!("{}", number.digitos());
            println!("{}", number);
        }
        Ok(ExitCode::SUCCESS)
    }

    fn scan(&self, input: Option<&Path>, all: bool) -> Result<ExitCode> {
        let text = read_input(input)?;
        let matcher = CnjMatcher::new();

        let candidates = matcher.extract_all(&text);
        tracing::debug!(candidates = candidates.len(), "scanned input");

        let mut found = Vec::new();
        for candidate in candidates {
            let valid = CnjNumber::parse(candidate).is_ok();
            if valid || all {
                found.push((candidate, valid));
            }
        }

        if self.json {
            let items: Vec<_> = found
                .iter()
                .map(|(number, valid)| serde_json::json!({ "numero": number, "valid": valid }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        } else if found.is_empty() {
            println!("⚠ No CNJ numbers found");
        } else {
            for (number, valid) in &found {
                if all {
                    println!("{} {}", if *valid { "✓" } else { "✗" }, number);
                } else {
                    println!("{}", number);
                }
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn exit_status(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn policy_for(cnj_only: bool) -> ValidationPolicy {
    if cnj_only {
        ValidationPolicy::CnjOnly
    } else {
        ValidationPolicy::Permissive
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let handler = CnjHandler::new(cli.json);

    match &cli.command {
        Commands::Format { input } => handler.format(input),
        Commands::Validate { input, cnj_only } => handler.validate(input, policy_for(*cnj_only)),
        Commands::Info { input } => handler.info(input),
        Commands::CheckDigits {
            sequencial,
            ano,
            segmento,
            tribunal,
            origem,
        } => handler.check_digits(sequencial, ano, segmento, tribunal, origem),
        Commands::Scan { input, all } => handler.scan(input.as_deref(), *all),
    }
}

//! Command-line host for axcell UUID values.
//!
//! Every command hands its argv strings to the binding surface as `Object::String`
//! values, the same way a scripting host would.

use std::process::ExitCode;

use axcell::{ArgValues, Object, TypeRegistry, UuidFunctions, UuidMethods, call_function, call_method};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Generate, normalize and compare UUIDs
#[derive(Parser, Debug)]
#[command(name = "axcell")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run in verbose mode (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print new random UUIDs
    Generate {
        /// How many to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// `upper` or `lower`; anything else prints the default form
        #[arg(short, long)]
        format: Option<String>,
        /// Print a JSON array instead of one UUID per line
        #[arg(long)]
        json: bool,
    },
    /// Parse a UUID and print its canonical form
    Parse {
        text: String,
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Print -1, 0 or 1 by byte-wise comparison of two UUIDs
    Compare { lhs: String, rhs: String },
    /// Print whether a UUID is the nil UUID
    IsNull { text: String },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Binding(#[from] axcell::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    let registry = axcell::init();
    match run(registry, cli.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one command and returns the lines it prints.
fn run(registry: &'static TypeRegistry, command: Command) -> Result<Vec<String>, CliError> {
    match command {
        Command::Generate { count, format, json } => {
            let lines = (0..count)
                .map(|_| {
                    let mut value = call_function(registry, UuidFunctions::Generate, ArgValues::Empty)?;
                    unparse(registry, &mut value, format.as_deref())
                })
                .collect::<axcell::Result<Vec<_>>>()?;
            if json {
                Ok(vec![serde_json::to_string(&lines)?])
            } else {
                Ok(lines)
            }
        }
        Command::Parse { text, format } => {
            let mut value = parse(registry, text)?;
            Ok(vec![unparse(registry, &mut value, format.as_deref())?])
        }
        Command::Compare { lhs, rhs } => {
            let mut lhs = parse(registry, lhs)?;
            let rhs = parse(registry, rhs)?;
            Ok(vec![method(registry, &mut lhs, UuidMethods::Cmp, ArgValues::One(rhs))?.to_string()])
        }
        Command::IsNull { text } => {
            let mut value = parse(registry, text)?;
            Ok(vec![method(registry, &mut value, UuidMethods::IsNull, ArgValues::Empty)?.to_string()])
        }
    }
}

fn parse(registry: &'static TypeRegistry, text: String) -> axcell::Result<Object> {
    call_function(registry, UuidFunctions::Parse, ArgValues::One(Object::String(text)))
}

fn unparse(registry: &'static TypeRegistry, value: &mut Object, format: Option<&str>) -> axcell::Result<String> {
    let args = format.map_or(ArgValues::Empty, |format| ArgValues::One(format.into()));
    method(registry, value, UuidMethods::Unparse, args).map(|text| text.to_string())
}

fn method(
    registry: &'static TypeRegistry,
    receiver: &mut Object,
    method: UuidMethods,
    args: ArgValues,
) -> axcell::Result<Object> {
    let result = call_method(registry, receiver, method, args)?;
    Ok(result.into_object(receiver))
}

#[cfg(test)]
mod tests {
    use axcell::{ErrorKind, ParseUuidError};
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn run_args(args: &[&str]) -> Result<Vec<String>, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("axcell").chain(args.iter().copied())).unwrap();
        run(axcell::init(), cli.command)
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from(["axcell", "generate", "-n", "3", "--format", "upper", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Generate {
                count: 3,
                format: Some("upper".to_owned()),
                json: true
            }
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["axcell", "is-null", SAMPLE, "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn compare_needs_two_values() {
        assert!(Cli::try_parse_from(["axcell", "compare", SAMPLE]).is_err());
    }

    #[test]
    fn parse_normalizes() {
        assert_eq!(run_args(&["parse", SAMPLE.to_uppercase().as_str()]).unwrap(), vec![SAMPLE.to_owned()]);
        assert_eq!(
            run_args(&["parse", SAMPLE, "--format", "upper"]).unwrap(),
            vec![SAMPLE.to_uppercase()]
        );
        assert_eq!(run_args(&["parse", SAMPLE, "--format", "banana"]).unwrap(), vec![SAMPLE.to_owned()]);
    }

    #[test]
    fn parse_reports_malformed_input() {
        let err = run_args(&["parse", "not-a-uuid"]).unwrap_err();
        let CliError::Binding(err) = err else {
            panic!("expected a binding error, got {err:?}");
        };
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(
            err,
            axcell::Error::MalformedInput {
                function: "parse",
                source: ParseUuidError::InvalidLength { len: 10 }
            }
        );
    }

    #[test]
    fn generate_prints_count_lines() {
        let lines = run_args(&["generate", "-n", "4", "--format", "upper"]).unwrap();
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.len(), 36);
            assert_eq!(*line, line.to_uppercase());
            assert_eq!(run_args(&["is-null", line.as_str()]).unwrap(), vec!["false".to_owned()]);
        }
    }

    #[test]
    fn generate_json() {
        let lines = run_args(&["generate", "-n", "2", "--json"]).unwrap();
        assert_eq!(lines.len(), 1);
        let decoded: Vec<String> = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_ne!(decoded[0], decoded[1]);
    }

    #[test]
    fn compare_prints_ordering() {
        let low = "00000000-0000-0000-0000-0000000000ff";
        let high = "00000000-0000-0000-0000-000000000100";
        assert_eq!(run_args(&["compare", low, high]).unwrap(), vec!["-1".to_owned()]);
        assert_eq!(run_args(&["compare", high, low]).unwrap(), vec!["1".to_owned()]);
        assert_eq!(
            run_args(&["compare", SAMPLE, SAMPLE.to_uppercase().as_str()]).unwrap(),
            vec!["0".to_owned()]
        );
    }

    #[test]
    fn is_null() {
        assert_eq!(
            run_args(&["is-null", "00000000-0000-0000-0000-000000000000"]).unwrap(),
            vec!["true".to_owned()]
        );
        assert_eq!(run_args(&["is-null", SAMPLE]).unwrap(), vec!["false".to_owned()]);
    }
}

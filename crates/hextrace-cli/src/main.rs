use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glob::glob;
use hextrace_core::{
    HexDump, Schema, SchemaDoc, SchemaError, SourceError, Trace, TraceError, load_schema_file,
    read_hex_file, sample_schema,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("HEXTRACE_BUILD_COMMIT"),
    "\nbuilt: ",
    env!("HEXTRACE_BUILD_DATE"),
);

const EXAMPLES: &str = "Examples:\n  hextrace decode stream.txt\n  hextrace decode capture.txt --schema frame.json --json --pretty\n  hextrace schema sample > frame.json";

#[derive(Parser, Debug)]
#[command(name = "hextrace")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Schema-driven decoder for annotated hex captures.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex capture against a schema and print the trace.
    #[command(after_help = EXAMPLES)]
    Decode {
        /// Path to a hex text file (glob patterns must match one file)
        #[arg(default_value = "stream.txt")]
        input: PathBuf,

        /// JSON schema document (defaults to the built-in sample schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Print the trace as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,

        /// Print the cleaned hex digits before the trace
        #[arg(long, conflicts_with = "json")]
        show_hex: bool,

        /// Suppress the byte count summary
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if bytes remain after the schema
        #[arg(long)]
        strict: bool,

        /// Enable debug logging on stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Inspect schema documents.
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
}

#[derive(Subcommand, Debug)]
enum SchemaCommands {
    /// Print the built-in sample schema as a JSON document.
    Sample,
    /// Load a schema document and report whether it is valid.
    Check {
        /// Path to a JSON schema document
        path: PathBuf,
    },
}

struct DecodeOptions {
    json: bool,
    pretty: bool,
    show_hex: bool,
    quiet: bool,
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            input,
            schema,
            json,
            pretty,
            show_hex,
            quiet,
            strict,
            verbose,
        } => {
            init_tracing(verbose);
            let options = DecodeOptions {
                json,
                pretty,
                show_hex,
                quiet,
                strict,
            };
            cmd_decode(&input, schema.as_deref(), &options)
        }
        Commands::Schema { command } => {
            init_tracing(false);
            match command {
                SchemaCommands::Sample => cmd_schema_sample(),
                SchemaCommands::Check { path } => cmd_schema_check(&path),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<SchemaError> for CliError {
    fn from(err: SchemaError) -> Self {
        let hint = match &err {
            SchemaError::Io(_) => "check the schema path",
            SchemaError::Document(_) => "see `hextrace schema sample` for the document layout",
            SchemaError::UnknownType { .. } => {
                "declare the type under \"types\" before it is referenced"
            }
            SchemaError::DuplicateType { .. } => "give each declared type a unique name",
            SchemaError::Configuration { .. } => {
                "a vector needs exactly one of \"prefix\" (1, 2 or 4) or \"count\", and an element that consumes bytes"
            }
        };
        CliError::new(format!("invalid schema: {err}"), Some(hint.to_string()))
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        let hint = match &err {
            SourceError::Io(_) => "check the input path",
            SourceError::MalformedHex(_) => {
                "input must hold an even number of hex digits; '#' starts a comment"
            }
        };
        CliError::new(format!("cannot read input: {err}"), Some(hint.to_string()))
    }
}

impl From<TraceError> for CliError {
    fn from(err: TraceError) -> Self {
        let hint = match &err {
            TraceError::MalformedHex(_) => "input must hold an even number of hex digits",
            TraceError::Decode { .. } => "the capture is shorter than the schema expects",
            TraceError::InvalidSchema { .. } => "balance indent and unindent markers",
        };
        CliError::new(format!("trace failed: {err}"), Some(hint.to_string()))
    }
}

fn cmd_decode(
    input: &Path,
    schema_path: Option<&Path>,
    options: &DecodeOptions,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(input)?;
    validate_input_file(&resolved_input)?;

    let schema = match schema_path {
        Some(path) => load_schema_file(path)?,
        None => sample_schema(),
    };
    debug!(
        input = %resolved_input.display(),
        fields = schema.field_count(),
        "decoding capture"
    );

    let dump = read_hex_file(&resolved_input)?;
    let trace = hextrace_core::run(&schema, &dump.bytes)?;

    if options.json {
        println!("{}", serialize_trace(&trace, options.pretty)?);
    } else {
        print_text(&dump, &trace, options);
    }

    if options.strict && trace.remaining_bytes() > 0 {
        return Err(CliError::new(
            format!(
                "{} trailing bytes after offset {}",
                trace.remaining_bytes(),
                trace.consumed_bytes
            ),
            Some("extend the schema or drop --strict".to_string()),
        ));
    }
    Ok(())
}

fn print_text(dump: &HexDump, trace: &Trace, options: &DecodeOptions) {
    if !options.quiet {
        println!("{} bytes", dump.len());
    }
    if options.show_hex {
        println!("{}", dump.digits);
    }
    print!("{trace}");
}

fn serialize_trace(trace: &Trace, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(trace)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(trace)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn cmd_schema_sample() -> Result<(), CliError> {
    let doc = SchemaDoc::from_schema(&sample_schema())?;
    println!("{}", doc.to_json_pretty()?);
    Ok(())
}

fn cmd_schema_check(path: &Path) -> Result<(), CliError> {
    validate_input_file(path)?;
    let schema: Schema = load_schema_file(path)?;
    println!(
        "OK: {} ({} entries, {} fields)",
        path.display(),
        schema.entries().len(),
        schema.field_count()
    );
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a path to an existing file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a path to a regular file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single capture file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

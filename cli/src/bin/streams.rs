//! `streams`: decode, re-encode and inspect ActivityStreams documents.
//!
//! **Usage:**
//! ```text
//! streams [--config <file>] [--max-depth <n>] [--strict-scalar-maps] [-v] <command>
//!
//!   roundtrip <file>     decode and re-encode, print the result (--with-context)
//!   inspect <file>       print each populated property and opaque entry
//!   check <files>...     round-trip every file and report PASS/WARN/FAIL
//!   context              print the vocabulary's JSON-LD @context
//!   types                list every vocabulary type
//! ```
//!
//! `check` exits non-zero if any document fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use streams_cli::{check_files, decode_file, inspect, roundtrip_file, Config};
use streams_engine::{DecodeOptions, VocabularyRegistry};
use streams_vocab::serializer::context::to_context;
use streams_vocab::Vocabulary;
use tracing_subscriber::EnvFilter;

/// Decode, re-encode and inspect ActivityStreams documents.
#[derive(Parser)]
#[command(name = "streams", version, about)]
struct Args {
    /// TOML file with a `[decode]` table.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum nesting depth of embedded objects (overrides the config file).
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Reject maps given to scalar-only properties instead of keeping them
    /// opaque (overrides the config file).
    #[arg(long, global = true)]
    strict_scalar_maps: bool,

    /// Log more (-v debug, -vv trace). `RUST_LOG` applies otherwise.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a document and print it re-encoded.
    Roundtrip {
        /// JSON document to read.
        file: PathBuf,

        /// Add the ActivityStreams `@context` reference to the output.
        #[arg(long)]
        with_context: bool,
    },
    /// Decode a document and describe its properties.
    Inspect {
        /// JSON document to read.
        file: PathBuf,
    },
    /// Round-trip documents and report the outcome of each.
    Check {
        /// JSON documents to read.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the vocabulary's JSON-LD context.
    Context,
    /// List every vocabulary type with its parent and property count.
    Types,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn decode_options(args: &Args) -> Result<DecodeOptions> {
    let mut options = match &args.config {
        Some(path) => Config::load(path)?.decode,
        None => DecodeOptions::default(),
    };
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if args.strict_scalar_maps {
        options.strict_scalar_maps = true;
    }
    Ok(options)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = decode_options(&args)?;
    let registry = VocabularyRegistry::default();

    match &args.command {
        Command::Roundtrip { file, with_context } => {
            let mut encoded = roundtrip_file(file, &registry, &options)?;
            if *with_context {
                encoded = streams_cli::with_context(encoded);
            }
            println!("{}", serde_json::to_string_pretty(&encoded)?);
        }
        Command::Inspect { file } => {
            let record = decode_file(file, &registry, &options)?;
            for line in inspect::describe(&record) {
                println!("{line}");
            }
        }
        Command::Check { files } => {
            let report = check_files(files.as_slice(), &registry, &options);
            println!("{report}");
            if !report.all_passed() {
                eprintln!(
                    "Check FAILED: {} document(s) did not round-trip.",
                    report.count(streams_cli::Severity::Failure)
                );
                process::exit(1);
            }
        }
        Command::Context => {
            let context = to_context(registry.vocabulary());
            println!(
                "{}",
                serde_json::to_string_pretty(&context).context("serializing context")?
            );
        }
        Command::Types => {
            let vocabulary: &Vocabulary = registry.vocabulary();
            for ty in &vocabulary.types {
                let properties = vocabulary.schema(ty.name).map_or(0, |s| s.properties.len());
                println!(
                    "{:<24} {:<22} {:>3} properties",
                    ty.name,
                    ty.extends.unwrap_or("-"),
                    properties
                );
            }
            println!();
            println!(
                "{} types, {} distinct properties (ActivityStreams {})",
                vocabulary.type_count(),
                vocabulary.property_count(),
                vocabulary.version
            );
        }
    }
    Ok(())
}

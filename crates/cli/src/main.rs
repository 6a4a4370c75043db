use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use structura_core::{Document, SynthesisConfig, Synthesizer, assemble, build_collection_payload};

mod echo;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Derive a structured-data payload from a stored document
#[derive(Parser, Debug)]
#[command(name = "structura")]
#[command(author = "Structura Contributors")]
#[command(version = VERSION)]
#[command(about = "Derive structured-data payloads from stored documents", long_about = None)]
struct Args {
    /// Document JSON file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "collection")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print the raw extraction instead of the payload
    #[arg(short, long)]
    extraction: bool,

    /// Build a collection payload instead of reading a document
    #[arg(long, num_args = 3, value_names = ["NAME", "DESC", "URL"])]
    collection: Option<Vec<String>>,

    /// Reading speed in words per minute
    #[arg(long, default_value = "200", value_name = "NUM")]
    wpm: usize,

    /// Minimum entries for a FAQ/how-to payload shape
    #[arg(long, default_value = "2", value_name = "NUM")]
    min_entries: usize,

    /// Character cap for step and answer text in the payload
    #[arg(long, default_value = "500", value_name = "NUM")]
    max_entry_chars: usize,

    /// Enable progress logging
    #[arg(short, long)]
    verbose: bool,
}

/// Read raw input from a file path or stdin ("-")
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

/// Write output to a file or stdout
fn write_output(text: &str, output: Option<&PathBuf>, verbose: bool) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write file: {}", path.display()))?;
            if verbose {
                echo::print_success(&format!("Wrote {}", path.display()));
            }
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<serde_json::Value> {
    if let Some(collection) = &args.collection {
        let payload = build_collection_payload(&collection[0], &collection[1], &collection[2]);
        return Ok(payload.to_json()?);
    }

    let input = args.input.as_deref().unwrap_or("-");

    if args.verbose {
        echo::print_step(1, 3, "Reading document");
    }
    let raw = read_input(input)?;
    let value: serde_json::Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let document = Document::from_json(&value)?;

    if args.verbose {
        echo::print_step(2, 3, "Extracting and classifying");
    }
    let config = SynthesisConfig::builder()
        .words_per_minute(args.wpm)
        .min_structure_entries(args.min_entries)
        .max_entry_text_chars(args.max_entry_chars)
        .build();
    let synthesizer = Synthesizer::with_config(config);

    let started = Instant::now();
    let extraction = synthesizer.extract(&document.body);
    let classification = synthesizer.classify(&document, &extraction);
    let payload = assemble(&document, &classification, &extraction, synthesizer.config());

    if args.verbose {
        echo::print_step(3, 3, "Assembling payload");
        echo::print_timing("synthesis", started.elapsed());
        echo::print_synthesis_details(&payload, &extraction);
    }

    if args.extraction { Ok(extraction.to_json()?) } else { Ok(payload.to_json()?) }
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let result = run(&args).and_then(|value| {
        let text = if args.pretty {
            serde_json::to_string_pretty(&value).context("Failed to format output")?
        } else {
            value.to_string()
        };
        write_output(&text, args.output.as_ref(), args.verbose)
    });

    if let Err(err) = result {
        echo::print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

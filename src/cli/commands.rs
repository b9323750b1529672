//! Command implementations for the triage CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TriageConfig;
use crate::error::Result;
use crate::pipeline::TriagePipeline;

/// Execute a CLI command.
pub fn execute_command(args: TriageArgs) -> Result<()> {
    let config = load_config(&args)?;

    if let Command::DumpConfig = args.command {
        return dump_config(&config, &args);
    }

    let pipeline = TriagePipeline::new(config)?;
    match &args.command {
        Command::Analyze(analyze_args) => analyze(&pipeline, analyze_args, &args),
        Command::Batch(batch_args) => batch(&pipeline, batch_args, &args),
        Command::Entities(text_args) => entities(&pipeline, text_args, &args),
        Command::Sanitize(text_args) => sanitize(&pipeline, text_args, &args),
        Command::DumpConfig => Ok(()),
    }
}

/// Configuration from `--config`, or the built-in tables.
fn load_config(args: &TriageArgs) -> Result<TriageConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            TriageConfig::from_file(path)
        }
        None => Ok(TriageConfig::default()),
    }
}

/// Triage one utterance.
fn analyze(pipeline: &TriagePipeline, args: &AnalyzeArgs, cli_args: &TriageArgs) -> Result<()> {
    let outcome = pipeline.analyze(&args.text);
    output_outcome(&outcome, args.show_tokens, cli_args)
}

/// Triage every line of a file or stdin.
fn batch(pipeline: &TriagePipeline, args: &BatchArgs, cli_args: &TriageArgs) -> Result<()> {
    let lines = if args.reads_stdin() {
        read_lines(io::stdin().lock(), args.keep_blank)?
    } else {
        read_lines(BufReader::new(File::open(&args.input)?), args.keep_blank)?
    };

    let start_time = Instant::now();
    let outcomes = pipeline.analyze_batch(&lines);
    let duration = start_time.elapsed();

    info!(
        "Triaged {} utterances in {}ms",
        outcomes.len(),
        duration.as_millis()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_batch(&outcomes, cli_args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Extract identifiers without scoring.
fn entities(pipeline: &TriagePipeline, args: &TextArgs, cli_args: &TriageArgs) -> Result<()> {
    let message = pipeline.sanitizer().sanitize(&args.text);
    let entities = pipeline.extractor().extract(&message.cleaned);
    output_entities(&entities, cli_args)
}

fn sanitize(pipeline: &TriagePipeline, args: &TextArgs, cli_args: &TriageArgs) -> Result<()> {
    let message = pipeline.sanitizer().sanitize(&args.text);
    output_sanitized(&message, cli_args)
}

/// Print the effective configuration. Always JSON, so the output can be fed
/// back through `--config`.
fn dump_config(config: &TriageConfig, cli_args: &TriageArgs) -> Result<()> {
    config.validate()?;
    let json = if cli_args.pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    println!("{json}");
    Ok(())
}

/// Read utterances, one per line.
fn read_lines<R: BufRead>(reader: R, keep_blank: bool) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if keep_blank || !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

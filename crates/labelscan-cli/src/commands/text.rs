//! Text command - extract insights from a plain-text transcription.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{info, warn};

use labelscan_core::{ExtractionError, InsightAggregator, InsightExtractor, OcrDocument, PatternRegistry};

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Text file to read, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Pretty-print the result
    #[arg(long)]
    pretty: bool,
}

pub async fn run(args: TextArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let text = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.input)?
    };
    info!("Read {} chars from {}", text.len(), args.input.display());

    let aggregator = InsightAggregator::from_config(PatternRegistry::global(), &config.extraction);
    let document = OcrDocument::from_text(text);

    let insights = match aggregator.extract(&document) {
        Ok(Some(insights)) => insights,
        Ok(None) => {
            eprintln!("{} No insights found", style("ℹ").blue());
            println!("{{}}");
            return Ok(());
        }
        Err(ExtractionError::NoText) => {
            warn!("No text in {}", args.input.display());
            println!("{{}}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let output = if args.pretty || config.output.pretty {
        serde_json::to_string_pretty(&insights)?
    } else {
        serde_json::to_string(&insights)?
    };
    println!("{}", output);

    Ok(())
}

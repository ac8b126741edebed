//! Extract command - write one insight record per OCR document.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use labelscan_core::{
    barcode_from_path, ExtractionError, InsightAggregator, InsightExtractor, InsightRecord,
    OcrDocument, PatternRegistry,
};

use crate::source::{local_files, read_document, InputSource, RemoteSource};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Product barcode (13 digits), OCR JSON file, or directory of OCR JSON files
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print records
    #[arg(long)]
    pretty: bool,
}

/// Per-run counters.
#[derive(Debug, Default)]
struct ExtractStats {
    documents: usize,
    written: usize,
    no_text: usize,
    no_insights: usize,
    failed: usize,
}

/// Writes records as JSON lines (or pretty JSON).
struct RecordWriter {
    inner: Box<dyn Write>,
    pretty: bool,
}

impl RecordWriter {
    fn open(output: Option<&Path>, pretty: bool) -> anyhow::Result<Self> {
        let inner: Box<dyn Write> = match output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self { inner, pretty })
    }

    fn write(&mut self, record: &InsightRecord) -> anyhow::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.inner, record)?;
        } else {
            serde_json::to_writer(&mut self.inner, record)?;
        }
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    fn finish(mut self) -> anyhow::Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let source = InputSource::resolve(&args.input)?;
    let aggregator = InsightAggregator::from_config(PatternRegistry::global(), &config.extraction);
    let mut writer = RecordWriter::open(args.output.as_deref(), args.pretty || config.output.pretty)?;
    let mut stats = ExtractStats::default();

    match source {
        InputSource::Remote(barcode) => {
            let remote = RemoteSource::new(&config.source)?;
            let images = remote.image_names(&barcode).await?;
            info!("Product {} has {} images", barcode, images.len());

            for image in images {
                info!("Getting OCR for image {}", image);
                match remote.fetch_document(&barcode, &image).await {
                    Ok(Some(document)) => {
                        process(&aggregator, &document, None, &mut writer, &mut stats)?;
                    }
                    Ok(None) => debug!("No OCR stored for image {}", image),
                    Err(e) => {
                        warn!("Failed to fetch OCR for image {}: {}", image, e);
                        stats.failed += 1;
                    }
                }
            }
        }
        InputSource::File(path) => {
            process_file(&aggregator, &path, &mut writer, &mut stats)?;
        }
        InputSource::Directory(dir) => {
            let files = local_files(&dir, &config.source.json_pattern)?;

            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
                    .progress_chars("=>-"),
            );

            for path in files {
                process_file(&aggregator, &path, &mut writer, &mut stats)?;
                pb.inc(1);
            }

            pb.finish_and_clear();
        }
    }

    writer.finish()?;

    eprintln!(
        "{} Processed {} documents in {:?}",
        style("✓").green(),
        stats.documents,
        start.elapsed()
    );
    eprintln!(
        "   {} records written, {} without text, {} without insights, {} failed",
        style(stats.written).green(),
        style(stats.no_text).yellow(),
        stats.no_insights,
        style(stats.failed).red()
    );

    if let Some(output) = &args.output {
        eprintln!("{} Output written to {}", style("✓").green(), output.display());
    }

    Ok(())
}

fn process_file(
    aggregator: &InsightAggregator<'_>,
    path: &Path,
    writer: &mut RecordWriter,
    stats: &mut ExtractStats,
) -> anyhow::Result<()> {
    match read_document(path) {
        Ok(document) => process(aggregator, &document, Some(path), writer, stats),
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            stats.failed += 1;
            Ok(())
        }
    }
}

fn process(
    aggregator: &InsightAggregator<'_>,
    document: &OcrDocument,
    file_path: Option<&Path>,
    writer: &mut RecordWriter,
    stats: &mut ExtractStats,
) -> anyhow::Result<()> {
    stats.documents += 1;
    let name = file_path.map_or_else(|| "remote document".to_string(), |p| p.display().to_string());

    match aggregator.extract(document) {
        Ok(Some(insights)) => {
            debug!("{}: {:?}", name, insights.categories());
            let record = InsightRecord {
                insights,
                file_path: file_path.map(|p| p.display().to_string()),
                code: file_path.and_then(barcode_from_path),
            };
            writer.write(&record)?;
            stats.written += 1;
        }
        Ok(None) => {
            debug!("No insights in {}", name);
            stats.no_insights += 1;
        }
        Err(ExtractionError::NoText) => {
            warn!("Could not extract OCR text content from {}", name);
            stats.no_text += 1;
        }
        Err(e) => {
            warn!("Extraction failed for {}: {}", name, e);
            stats.failed += 1;
        }
    }

    Ok(())
}

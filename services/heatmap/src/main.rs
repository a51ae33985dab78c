//! Monthly global land-surface temperature heatmap.
//!
//! Fetches the temperature dataset once and writes the chart as:
//! - a standalone HTML page with hover tooltips
//! - the bare SVG drawing surface
//! - a PNG raster of the drawing surface

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap::{
    load_and_render, ChartConfig, DataSource, FileDataSource, HttpDataSource, OutputFormat,
};
use renderer::{ChartRenderer, Container};

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global land-surface temperature heatmap")]
struct Args {
    /// YAML configuration file
    #[arg(long, env = "HEATMAP_CONFIG")]
    config: Option<PathBuf>,

    /// URL of the temperature dataset
    #[arg(long, env = "HEATMAP_SOURCE_URL")]
    source_url: Option<String>,

    /// Read the dataset from a local file instead of fetching it; wins over --source-url
    #[arg(long)]
    input: Option<PathBuf>,

    /// Container the chart is mounted into (`#id`)
    #[arg(long, env = "HEATMAP_SELECTOR")]
    selector: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HEATMAP_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Layer flags and environment over the file configuration.
    fn merge_into(&self, mut config: ChartConfig) -> ChartConfig {
        if let Some(url) = &self.source_url {
            config.source_url = url.clone();
        }
        if let Some(selector) = &self.selector {
            config.selector = selector.clone();
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout may carry the chart, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if args.format.is_binary() && args.output.is_none() {
        bail!("--format {} requires --output", args.format);
    }

    let base = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    let config = args.merge_into(base);

    let container = Container::from_selector(&config.selector)?;
    let renderer = ChartRenderer::new(config.dimensions).with_title(config.title.clone());
    let source: Box<dyn DataSource> = match &args.input {
        Some(path) => Box::new(FileDataSource::new(path)),
        None => Box::new(HttpDataSource::new(&config.source_url, config.timeout())?),
    };

    info!(source = %source.describe(), format = %args.format, "Rendering heatmap");

    let result = load_and_render(source.as_ref(), &container, &renderer)
        .await
        .context("Failed to render heatmap")?;
    let bytes = result.encode(args.format)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &bytes)
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            info!(path = ?path, bytes = bytes.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    info!(summary = %result.summary(), "Done");
    Ok(())
}

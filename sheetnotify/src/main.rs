use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sheetnotify_core::{
    EditEvent, EditNotifier, EditRange, NotifierConfig, UpdatePayload, WorkbookSheet,
};
use std::path::PathBuf;

mod formatter;

#[derive(Parser)]
#[command(name = "sheetnotify")]
#[command(about = "Replay a spreadsheet range edit as a JSON update notification", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file holding the edited values
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Edited range in A1 notation (e.g. B2 or B2:C3)
    #[arg(short, long, value_name = "RANGE")]
    range: String,

    /// Sheet name (defaults to the first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the payload instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output (the request body as posted)
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        NotifierConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("sheetnotify.toml");
        if default_config_path.exists() {
            NotifierConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            NotifierConfig::default()
        }
    };

    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
        config.sheets.clear();
    }
    if cli.timeout.is_some() {
        config.timeout_seconds = cli.timeout;
    }

    let range = EditRange::parse(&cli.range).context("Invalid range")?;
    let sheet = WorkbookSheet::open(&cli.file, cli.sheet.as_deref())
        .with_context(|| format!("Failed to read workbook: {}", cli.file.display()))?;
    let event = EditEvent::new(&sheet, range);

    if cli.dry_run {
        config.validate().context("Invalid configuration")?;
        let payload = UpdatePayload::from_event(&event);
        let endpoint = config.endpoint_for(&payload.sheet_name)?;
        match cli.format {
            OutputFormat::Human => formatter::print_human(&endpoint, &range, &payload),
            OutputFormat::Json => formatter::print_json(&payload)?,
        }
        return Ok(());
    }

    let notifier = EditNotifier::new(config).context("Invalid configuration")?;
    let delivery = notifier
        .notify(&event)
        .with_context(|| {
            format!(
                "Failed to notify edit of {} in '{}'",
                range,
                event.sheet_name()
            )
        })?;

    match cli.format {
        OutputFormat::Human => formatter::print_delivery(&delivery),
        OutputFormat::Json => formatter::print_delivery_json(&delivery)?,
    }

    Ok(())
}

//! Parse command - extract structured data from a single receipt text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use recx_core::models::config::RecxConfig;
use recx_core::models::record::ParsedRecord;
use recx_core::receipt::{ReceiptParser, RuleReceiptParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (already-extracted receipt text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = fs::read_to_string(&args.input)?;
    let parser = RuleReceiptParser::from_config(&config.extraction);
    let outcome = parser.parse(&text)?;

    debug!(
        "parsed {} in {}ms",
        args.input.display(),
        outcome.processing_time_ms
    );

    let output = format_record(&outcome.record, args.format, &config)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !outcome.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &outcome.warnings {
            eprintln!("  - {}", warning);
        }
    }

    Ok(())
}

pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<RecxConfig> {
    Ok(match path {
        Some(p) => RecxConfig::from_file(std::path::Path::new(p))?,
        None => RecxConfig::default(),
    })
}

pub(crate) fn format_record(
    record: &ParsedRecord,
    format: OutputFormat,
    config: &RecxConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record, config)),
    }
}

fn format_csv(record: &ParsedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "merchant",
        "invoice_number",
        "date",
        "category",
        "subtotal",
        "tax",
        "grand_total",
        "items",
        "payment_mode",
        "reference_id",
    ])?;

    wtr.write_record([
        &record.merchant,
        &record.invoice_number,
        &record.date,
        &record.category.to_string(),
        &record.totals.subtotal.to_string(),
        &record.totals.tax.to_string(),
        &record.totals.grand_total.to_string(),
        &record.items.len().to_string(),
        &record.payment_mode,
        &record.reference_id,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ParsedRecord, config: &RecxConfig) -> String {
    let currency = &config.output.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Merchant: {}\n", record.merchant));
    if !record.invoice_number.is_empty() {
        output.push_str(&format!("Invoice:  {}\n", record.invoice_number));
    }
    if !record.date.is_empty() {
        output.push_str(&format!("Date:     {}\n", record.date));
    }
    output.push_str(&format!("Category: {}\n", record.category));
    output.push('\n');

    if record.items.is_empty() {
        output.push_str(&format!(
            "No line items detected; grand total {}{}\n",
            currency, record.totals.grand_total
        ));
    } else {
        output.push_str("Items:\n");
        for item in &record.items {
            output.push_str(&format!(
                "  {} x{}  {}{}\n",
                item.description, item.quantity, currency, item.line_total
            ));
        }
    }
    output.push('\n');

    output.push_str("Summary:\n");
    output.push_str(&format!(
        "  Subtotal: {}{}\n",
        currency, record.totals.subtotal
    ));
    output.push_str(&format!("  Tax:      {}{}\n", currency, record.totals.tax));
    for (label, amount) in &record.totals.tax_breakdown {
        output.push_str(&format!("    {}: {}{}\n", label, currency, amount));
    }
    output.push_str(&format!(
        "  Total:    {}{}\n",
        currency, record.totals.grand_total
    ));

    if !record.payment_mode.is_empty() {
        output.push_str(&format!("\nPaid by {}", record.payment_mode));
        if !record.reference_id.is_empty() {
            output.push_str(&format!(" (ref {})", record.reference_id));
        }
        output.push('\n');
    }

    output
}

//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_json, export_transactions_csv, export_yaml};
use crate::state::AppState;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (user, transactions, budgets, goals, summary)
    Json,
    /// CSV (transactions only)
    Csv,
    /// YAML (same content as JSON)
    Yaml,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(state: &AppState, args: ExportArgs) -> LedgerResult<()> {
    state.require_session()?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Json => export_json(state, &mut writer, args.pretty)?,
        ExportFormat::Csv => {
            export_transactions_csv(state, &mut writer)?;
        }
        ExportFormat::Yaml => export_yaml(state, &mut writer)?,
    }

    if matches!(args.format, ExportFormat::Json) {
        writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    }
    writer.flush().map_err(|e| LedgerError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

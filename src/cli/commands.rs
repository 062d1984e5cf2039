//! CLI command implementations

use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, BufRead};
use std::path::Path;

use crate::batch::BatchValidator;
use crate::config::ValidatorConfig;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::schema::{self, FieldDef, Record, SurveyRecord, UnknownFieldPolicy, SURVEY_FIELDS};
use crate::stats::{self, FrequencyTable, Summary};
use crate::table::{read_ndjson, CsvTableReader, TableResult};

use super::args::{Cli, Command, Format};
use super::errors::{CliError, CliResult};
use super::io::{write_json, write_text};

/// How a successful command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to flag
    Clean,
    /// Validation ran to completion and found invalid records
    InvalidRecords,
}

/// Run a parsed CLI invocation
pub fn run_command(cli: Cli) -> CliResult<Outcome> {
    Logger::set_enabled(!cli.quiet);

    match cli.command {
        Command::Validate {
            input,
            stdin,
            config,
            format,
            all_rows,
            report_unknown,
        } => {
            let mut config = load_config(config.as_deref())?;
            if all_rows {
                config.include_valid_rows = true;
            }
            if report_unknown {
                config.unknown_fields = UnknownFieldPolicy::Report;
            }

            let records = read_input(input.as_deref(), stdin, io::stdin().lock())?;
            validate(config, &records, format)
        }
        Command::Dictionary => {
            write_json(&SURVEY_FIELDS)?;
            Ok(Outcome::Clean)
        }
        Command::Frequencies {
            input,
            field,
            format,
        } => {
            let records = load_csv(&input)?;
            frequencies(&records, &field, format)?;
            Ok(Outcome::Clean)
        }
    }
}

fn load_config(path: Option<&Path>) -> CliResult<ValidatorConfig> {
    let config = ValidatorConfig::load_or_default(path)?;
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("source", source.as_str())]);
    Ok(config)
}

/// Reads the CSV at `input`, or NDJSON from `stdin_reader` when `--stdin` is set
fn read_input<R: BufRead>(
    input: Option<&Path>,
    stdin: bool,
    stdin_reader: R,
) -> TableResult<Vec<Record>> {
    match input {
        Some(path) if !stdin => load_csv(path),
        _ => read_ndjson(stdin_reader),
    }
}

fn load_csv(path: &Path) -> TableResult<Vec<Record>> {
    let path_str = path.display().to_string();
    match CsvTableReader::new().read_path(path) {
        Ok(table) => {
            let rows = table.len().to_string();
            let columns = table.headers.len().to_string();
            log_event_with_fields(
                Event::TableLoaded,
                &[
                    ("path", path_str.as_str()),
                    ("rows", rows.as_str()),
                    ("columns", columns.as_str()),
                ],
            );
            Ok(table.records)
        }
        Err(e) => {
            let message = e.to_string();
            log_event_with_fields(
                Event::TableFailed,
                &[("path", path_str.as_str()), ("code", e.code()), ("message", message.as_str())],
            );
            Err(e)
        }
    }
}

/// Validate records and print the report
pub fn validate(config: ValidatorConfig, records: &[Record], format: Format) -> CliResult<Outcome> {
    let report = BatchValidator::new(config).validate_batch(records);

    match format {
        Format::Json => write_json(&report)?,
        Format::Text => write_text(&report.to_text())?,
    }

    if report.all_valid() {
        Ok(Outcome::Clean)
    } else {
        Ok(Outcome::InvalidRecords)
    }
}

#[derive(Serialize)]
struct FrequencyOutput {
    field: &'static str,
    description: &'static str,
    rows_used: usize,
    rows_skipped: usize,
    table: FrequencyTable,
    summary: Option<Summary>,
}

/// Print the frequency table and summary of one field over valid rows
pub fn frequencies(records: &[Record], field_name: &str, format: Format) -> CliResult<()> {
    let def = schema::field(field_name)
        .ok_or_else(|| CliError::UnknownField(field_name.to_string()))?;
    let output = frequency_output(records, def);

    let codes = output.table.rows.len().to_string();
    let used = output.rows_used.to_string();
    log_event_with_fields(
        Event::FrequenciesComputed,
        &[("field", def.name), ("codes", codes.as_str()), ("rows", used.as_str())],
    );

    match format {
        Format::Json => write_json(&output),
        Format::Text => write_text(&frequency_text(&output)),
    }
}

/// Tabulates `def` over the rows that pass validation; the rest are counted as skipped
fn frequency_output(records: &[Record], def: &'static FieldDef) -> FrequencyOutput {
    let valid: Vec<SurveyRecord> = records
        .iter()
        .filter_map(|r| SurveyRecord::from_record(r).ok())
        .collect();

    FrequencyOutput {
        field: def.name,
        description: def.description,
        rows_used: valid.len(),
        rows_skipped: records.len() - valid.len(),
        table: stats::tabulate(&valid, def),
        summary: Summary::of(&stats::column(&valid, def)),
    }
}

fn frequency_text(output: &FrequencyOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", output.field, output.description);
    let _ = writeln!(
        out,
        "{:>6} {:>10} {:>9} {:>10} {:>9}  label",
        "code", "freq", "rel", "cum", "cum_rel"
    );
    for row in &output.table.rows {
        let _ = writeln!(
            out,
            "{:>6} {:>10} {:>9.4} {:>10} {:>9.4}  {}",
            row.code,
            row.frequency,
            row.relative,
            row.cumulative,
            row.cumulative_relative,
            row.label.unwrap_or("")
        );
    }
    if let Some(s) = &output.summary {
        let _ = writeln!(
            out,
            "n={} mean={:.3} median={} mode={} min={} max={}",
            s.count, s.mean, s.median, s.mode, s.min, s.max
        );
    }
    if output.rows_skipped > 0 {
        let _ = writeln!(out, "({} invalid rows skipped)", output.rows_skipped);
    }
    out
}

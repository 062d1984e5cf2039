//! Reading survey tables into raw records

use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, Read};
use std::path::Path;

use super::errors::{TableError, TableResult};
use crate::schema::Record;

/// A loaded table: header plus one raw record per data row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names exactly as they appear in the header
    pub headers: Vec<String>,
    /// Raw records in file order
    pub records: Vec<Record>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// CSV reader for survey tables
pub struct CsvTableReader {
    delimiter: u8,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a CSV file
    pub fn read_path(&self, path: &Path) -> TableResult<Table> {
        let file = File::open(path).map_err(|source| TableError::Open {
            path: path.display().to_string(),
            source,
        })?;
        self.read(file)
    }

    /// Read CSV from any reader
    pub fn read<R: Read>(&self, reader: R) -> TableResult<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::Fields)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(TableError::Header)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut seen = HashSet::new();
        for name in &headers {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|source| TableError::Row {
                row: index + 1,
                source,
            })?;
            records.push(row_to_record(&headers, &row));
        }

        Ok(Table { headers, records })
    }
}

fn row_to_record(headers: &[String], row: &StringRecord) -> Record {
    let mut record = Record::new();
    for (name, cell) in headers.iter().zip(row.iter()) {
        if let Some(value) = parse_cell(cell) {
            record.insert(name.clone(), value);
        }
    }
    record
}

/// Converts one CSV cell into a record value.
///
/// Empty cells are absent values. Integers and finite floats become numbers;
/// anything else stays text so the validator can report it.
pub fn parse_cell(cell: &str) -> Option<Value> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Some(Value::from(i));
    }
    if let Some(n) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
        return Some(Value::Number(n));
    }
    Some(Value::String(cell.to_string()))
}

/// Read newline-delimited JSON records. Blank lines are skipped.
pub fn read_ndjson<R: BufRead>(reader: R) -> TableResult<Vec<Record>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line).map_err(|source| TableError::Json {
            line: index + 1,
            source,
        })?;
        match value {
            Value::Object(record) => records.push(record),
            _ => return Err(TableError::NotAnObject(index + 1)),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("   "), None);
        assert_eq!(parse_cell("3"), Some(json!(3)));
        assert_eq!(parse_cell("40.0"), Some(json!(40.0)));
        assert_eq!(parse_cell("-1"), Some(json!(-1)));
        assert_eq!(parse_cell("abc"), Some(json!("abc")));
        assert_eq!(parse_cell("NaN"), Some(json!("NaN")));
        assert_eq!(parse_cell("inf"), Some(json!("inf")));
    }

    #[test]
    fn test_read_csv() {
        let data = "Sex,Age,Note\n1.0,9.0,x\n0,,\n";
        let table = CsvTableReader::new().read(data.as_bytes()).unwrap();

        assert_eq!(table.headers, vec!["Sex", "Age", "Note"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0]["Sex"], json!(1.0));
        assert_eq!(table.records[0]["Note"], json!("x"));
        assert!(!table.records[1].contains_key("Age"));
    }

    #[test]
    fn test_header_names_kept_verbatim() {
        let table = CsvTableReader::new().read("genhlth,GenHlth\n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.records[0]["genhlth"], json!(1));
        assert_eq!(table.records[0]["GenHlth"], json!(2));
    }

    #[test]
    fn test_padded_header_not_trimmed() {
        let table = CsvTableReader::new()
            .read(" GenHlth ,Sex\n 3 ,1\n".as_bytes())
            .unwrap();
        assert_eq!(table.headers, vec![" GenHlth ", "Sex"]);
        assert_eq!(table.records[0][" GenHlth "], json!(3));
        assert!(!table.records[0].contains_key("GenHlth"));
    }

    #[test]
    fn test_ragged_row_is_error() {
        let err = CsvTableReader::new()
            .read("Sex,Age\n1,2\n1\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.code(), "BRFSS_TABLE_ROW");
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_duplicate_column_is_error() {
        let err = CsvTableReader::new().read("Sex,Sex\n1,1\n".as_bytes()).unwrap_err();
        assert_eq!(err.code(), "BRFSS_TABLE_DUPLICATE_COLUMN");
    }

    #[test]
    fn test_custom_delimiter() {
        let table = CsvTableReader::new()
            .with_delimiter(b';')
            .read("Sex;Age\n1;13\n".as_bytes())
            .unwrap();
        assert_eq!(table.records[0]["Age"], json!(13));
    }

    #[test]
    fn test_read_ndjson() {
        let input = "{\"Sex\": 1}\n\n{\"Sex\": 0, \"Age\": 3}\n";
        let records = read_ndjson(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["Age"], json!(3));
    }

    #[test]
    fn test_ndjson_rejects_non_objects() {
        let err = read_ndjson("{\"Sex\": 1}\n[1, 2]\n".as_bytes()).unwrap_err();
        assert_eq!(err.code(), "BRFSS_TABLE_NOT_OBJECT");

        let err = read_ndjson("{oops\n".as_bytes()).unwrap_err();
        assert_eq!(err.code(), "BRFSS_TABLE_JSON");
    }
}

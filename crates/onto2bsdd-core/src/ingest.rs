use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{OntoError, Result};
use crate::row::OntologyRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// `.json` selects JSON rows, everything else is read as CSV.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Reads header-driven CSV rows in file order. Short records are accepted;
/// their missing trailing cells read as absent.
pub fn read_rows_csv<R: Read>(reader: R) -> Result<Vec<OntologyRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = OntologyRow::from_fields(headers.iter().zip(record.iter()));
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

pub fn parse_rows_csv(raw: &str) -> Result<Vec<OntologyRow>> {
    read_rows_csv(raw.as_bytes())
}

/// Parses a JSON array of row objects. Non-string cell values are ignored.
pub fn parse_rows_json(raw: &str) -> Result<Vec<OntologyRow>> {
    let objects = serde_json::from_str::<Vec<Map<String, Value>>>(raw)?;
    let rows = objects
        .iter()
        .map(row_from_object)
        .filter(|row| !row.is_empty())
        .collect();
    Ok(rows)
}

fn row_from_object(object: &Map<String, Value>) -> OntologyRow {
    let cells = object
        .iter()
        .filter_map(|(column, value)| Some((column, value.as_str()?)));
    OntologyRow::from_fields(cells)
}

pub fn read_rows_path(path: &Path) -> Result<Vec<OntologyRow>> {
    match InputFormat::from_path(path) {
        InputFormat::Csv => {
            let file = File::open(path).map_err(|err| {
                OntoError::Io(std::io::Error::new(
                    err.kind(),
                    format!("failed to open {}: {err}", path.display()),
                ))
            })?;
            read_rows_csv(file)
        }
        InputFormat::Json => {
            let raw = std::fs::read_to_string(path)?;
            parse_rows_json(&raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_keep_file_order_and_skip_blank_records() {
        let raw = "\u{feff}ontoClassURI,ontoClassPrefLabel,extra\n\
                   http://ex.org/Wall,Wall,x\n\
                   ,,\n\
                   http://ex.org/Door,Door,y\n";
        let rows = parse_rows_csv(raw).expect("parse csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].class_uri(), Some("http://ex.org/Wall"));
        assert_eq!(rows[1].class_uri(), Some("http://ex.org/Door"));
    }

    #[test]
    fn csv_short_records_leave_missing_cells_absent() {
        let raw = "ontoClassURI,ontoPropertyURI,ontoPropertyPrefLabel\nhttp://ex.org/Wall\n";
        let rows = parse_rows_csv(raw).expect("parse csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].property_uri(), None);
        assert_eq!(rows[0].onto_property_pref_label, None);
    }

    #[test]
    fn csv_quoted_cells_keep_embedded_commas() {
        let raw = "ontoClassURI,ontoClassDefinition\nhttp://ex.org/Wall,\"A wall, vertical\"\n";
        let rows = parse_rows_csv(raw).expect("parse csv");
        assert_eq!(
            rows[0].onto_class_definition.as_deref(),
            Some("A wall, vertical")
        );
    }

    #[test]
    fn json_rows_ignore_non_string_values() {
        let raw = r#"[{"ontoClassURI":"http://ex.org/Wall","ontoClassPrefLabel":7},{}]"#;
        let rows = parse_rows_json(raw).expect("parse json");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].onto_class_pref_label, None);
    }

    #[test]
    fn input_format_follows_extension() {
        let format_of = |name: &str| InputFormat::from_path(Path::new(name));
        assert_eq!(format_of("rows.JSON"), InputFormat::Json);
        assert_eq!(format_of("rows.csv"), InputFormat::Csv);
        assert_eq!(format_of("rows"), InputFormat::Csv);
    }

    #[test]
    fn read_rows_path_reports_missing_file_as_io_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("missing.csv");
        let err = read_rows_path(&missing).expect_err("must fail");
        assert_eq!(err.code(), "IO_ERROR");
    }
}

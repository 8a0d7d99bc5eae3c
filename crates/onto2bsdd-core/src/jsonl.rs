use serde::Serialize;
use serde::de::DeserializeOwned;

/// A line that could not be decoded. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct JsonlRecords<T> {
    pub records: Vec<T>,
    pub skipped_lines: usize,
    pub first_error: Option<LineError>,
}

/// Decodes one record per non-blank line. Undecodable lines are counted and
/// skipped; only the first one keeps its error.
pub fn read_records<T>(raw: &str) -> JsonlRecords<T>
where
    T: DeserializeOwned,
{
    let mut outcome = JsonlRecords {
        records: Vec::new(),
        skipped_lines: 0,
        first_error: None,
    };

    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(record) => outcome.records.push(record),
            Err(err) => {
                outcome.skipped_lines += 1;
                outcome.first_error.get_or_insert_with(|| LineError {
                    line: idx + 1,
                    message: err.to_string(),
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_neither_records_nor_errors() {
        let outcome = read_records::<serde_json::Value>("\n{\"a\":1}\n   \n");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.skipped_lines, 0);
        assert!(outcome.first_error.is_none());
    }

    #[test]
    fn undecodable_lines_are_counted_and_first_is_kept() {
        let raw = "{\"a\":1}\n\nnot json\n{\"a\":2}\n[\n";
        let outcome = read_records::<serde_json::Value>(raw);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped_lines, 2);
        let first = outcome.first_error.expect("first error");
        assert_eq!(first.line, 3);
        assert!(!first.message.is_empty());
    }
}

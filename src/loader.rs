use std::path::{Path, PathBuf};

use crate::parse::{parse_header, parse_values, ParseError};
use crate::record::{Dataset, Record, RecordError};

/// Possible errors to occur while loading a CSV file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("`{path}` was not found")]
    NotFound { path: PathBuf },
    #[error("Failed to read `{path}`")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("The file is empty and has no header line")]
    MissingHeader,
    #[error("Line {line} could not be parsed")]
    Parse { line: usize, source: ParseError },
    #[error("Line {line} does not match the header")]
    Shape { line: usize, source: RecordError },
}

/// Loads loan CSV files into in-memory datasets
///
/// The file format is plain comma separated text without quoting or
/// escaping: the first line names the fields, every further line holds
/// one numeric value per field, empty fields standing for `0.0`. By
/// default a line with more or fewer values than the header is truncated
/// to the shorter of the two; [`CsvLoader::strict`] turns that mismatch
/// into an error instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvLoader {
    strict: bool,
}

impl CsvLoader {
    /// Creates a loader with the default, truncating pairing behavior
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the loader reject lines that don't match the header length
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Reads and parses the file at the given path
    ///
    /// The whole file is read before any line is parsed. Loading fails at
    /// the first malformed line; no partial dataset is returned.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_owned(),
            },
            _ => LoadError::Io {
                path: path.to_owned(),
                source,
            },
        })?;

        self.load_str(&text)
    }

    /// Parses CSV text that is already in memory
    pub fn load_str(&self, text: &str) -> Result<Dataset, LoadError> {
        let mut lines = text.lines();
        let headers = parse_header(lines.next().ok_or(LoadError::MissingHeader)?);
        let mut dataset = Dataset::new(headers);

        for (index, line) in lines.enumerate() {
            // 1-based position in the file, counting the header
            let line_number = index + 2;
            let values = parse_values(line).map_err(|source| LoadError::Parse {
                line: line_number,
                source,
            })?;
            let record = match self.strict {
                true => {
                    Record::from_pairs_strict(values, dataset.headers()).map_err(|source| {
                        LoadError::Shape {
                            line: line_number,
                            source,
                        }
                    })?
                }
                false => Record::from_pairs(values, dataset.headers()),
            };
            dataset.push(record);
        }

        log::debug!(
            "loaded {} records with {} fields",
            dataset.len(),
            dataset.headers().len()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOANS: &str = "\
amount,duration,rate,down_payment
828400,120,0.11,100000
4633400,240,0.06,
42900,90,0.07,8900";

    #[test]
    fn one_record_per_data_line_in_file_order() {
        let dataset = CsvLoader::new().load_str(LOANS).unwrap();

        assert_eq!(dataset.headers(), ["amount", "duration", "rate", "down_payment"]);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].get("amount"), Some(828400.0));
        assert_eq!(dataset.records()[2].get("duration"), Some(90.0));
    }

    #[test]
    fn empty_fields_default_to_zero() {
        let dataset = CsvLoader::new().load_str(LOANS).unwrap();
        assert_eq!(dataset.records()[1].get("down_payment"), Some(0.0));
    }

    #[test]
    fn header_only_file_yields_an_empty_dataset() {
        let dataset = CsvLoader::new().load_str("amount,duration,rate\n").unwrap();
        assert_eq!(dataset.headers(), ["amount", "duration", "rate"]);
        assert!(dataset.is_empty());
    }

    #[test]
    fn empty_file_has_no_header() {
        assert!(matches!(
            CsvLoader::new().load_str(""),
            Err(LoadError::MissingHeader),
        ));
    }

    #[test]
    fn short_lines_are_truncated_by_default() {
        let dataset = CsvLoader::new().load_str("a,b,c\n1,2").unwrap();
        assert_eq!(dataset.records()[0].len(), 2);
        assert_eq!(dataset.records()[0].get("c"), None);
    }

    #[test]
    fn long_lines_drop_their_tail_by_default() {
        let dataset = CsvLoader::new().load_str("a,b\n1,2,3").unwrap();
        assert_eq!(dataset.records()[0].len(), 2);
    }

    #[test]
    fn strict_mode_rejects_mismatched_lines() {
        let err = CsvLoader::new().strict().load_str("a,b,c\n1,2,3\n4,5").unwrap_err();
        assert!(matches!(err, LoadError::Shape { line: 3, .. }));
    }

    #[test]
    fn malformed_line_fails_with_its_position() {
        let err = CsvLoader::new().load_str("a,b\n1,2\n3,oops").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                line: 3,
                source: ParseError::InvalidNumber { ref token, .. },
            } if token == "oops",
        ));
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = CsvLoader::new().load("/no/such/place/loans1.txt").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }
}

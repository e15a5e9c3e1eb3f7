//! Edge-list ingestion.
//!
//! Input is a sequence of whitespace-separated integer triples
//! `endpoint_a endpoint_b lamps`, one link per triple, until end of input.
//! Line breaks carry no meaning.

use std::fmt;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// One declared link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRecord {
    pub endpoint_a: u32,
    pub endpoint_b: u32,
    pub lamps: i64,
}

impl LinkRecord {
    pub fn as_tuple(&self) -> (u32, u32, i64) {
        (self.endpoint_a, self.endpoint_b, self.lamps)
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.endpoint_a, self.endpoint_b, self.lamps)
    }
}

/// Errors produced while reading an edge list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `record` is 1-based.
    #[error("record {record}: invalid {field} '{token}'")]
    InvalidField {
        record: usize,
        field: &'static str,
        token: String,
    },

    #[error("record {record}: expected 3 values, found {found}")]
    Incomplete { record: usize, found: usize },
}

impl InputError {
    pub fn is_io(&self) -> bool {
        matches!(self, InputError::Io { .. })
    }
}

/// Parses every record in `text`.
pub fn parse_records(text: &str) -> Result<Vec<LinkRecord>, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    tokens
        .chunks(3)
        .enumerate()
        .map(|(i, chunk)| parse_record(i + 1, chunk))
        .collect()
}

fn parse_record(record: usize, chunk: &[&str]) -> Result<LinkRecord, InputError> {
    let [a, b, lamps] = chunk else {
        return Err(InputError::Incomplete {
            record,
            found: chunk.len(),
        });
    };
    Ok(LinkRecord {
        endpoint_a: parse_field(record, "source id", a)?,
        endpoint_b: parse_field(record, "source id", b)?,
        lamps: parse_field(record, "lamp count", lamps)?,
    })
}

fn parse_field<T: std::str::FromStr>(
    record: usize,
    field: &'static str,
    token: &str,
) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidField {
        record,
        field,
        token: token.to_string(),
    })
}

/// Reads and parses the edge list at `path`; `-` reads standard input.
pub fn read_records(path: &Path) -> Result<Vec<LinkRecord>, InputError> {
    let io_err = |source| InputError::Io {
        path: path.display().to_string(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_err)?
    };
    parse_records(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_across_arbitrary_whitespace() {
        let records = parse_records("1 2 5\n2 3\n7\n\n").unwrap();
        assert_eq!(
            records,
            vec![
                LinkRecord {
                    endpoint_a: 1,
                    endpoint_b: 2,
                    lamps: 5
                },
                LinkRecord {
                    endpoint_a: 2,
                    endpoint_b: 3,
                    lamps: 7
                },
            ]
        );
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse_records("  \n ").unwrap().is_empty());
    }

    #[test]
    fn trailing_partial_record_is_rejected() {
        let err = parse_records("1 2 5 3 4").unwrap_err();
        assert!(matches!(err, InputError::Incomplete { record: 2, found: 2 }));
        assert_eq!(err.to_string(), "record 2: expected 3 values, found 2");
    }

    #[test]
    fn negative_source_id_is_rejected() {
        let err = parse_records("1 -2 5").unwrap_err();
        assert_eq!(err.to_string(), "record 1: invalid source id '-2'");
    }

    #[test]
    fn negative_lamp_count_is_accepted() {
        let records = parse_records("4 4 -1").unwrap();
        assert_eq!(records[0].lamps, -1);
    }

    #[test]
    fn non_numeric_lamp_count_is_rejected() {
        let err = parse_records("1 2 many").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidField {
                record: 1,
                field: "lamp count",
                ..
            }
        ));
    }

    #[test]
    fn record_display_echoes_input_form() {
        let r = LinkRecord {
            endpoint_a: 3,
            endpoint_b: 9,
            lamps: 12,
        };
        assert_eq!(r.to_string(), "3 9 12");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_records(Path::new("/nonexistent/lamplight/input.txt")).unwrap_err();
        assert!(err.is_io());
    }
}

//! Whitespace-separated tables: a header line naming the columns (label
//! last), then one record per line.
use crate::dataset::{AttributeSchema, Dataset, Record};
use crate::error::{Result, TreeError};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::Arc;

fn tokens(line: &str) -> Vec<String> {
    lazy_static! {
        static ref FIELD: Regex = Regex::new(r"\S+").unwrap();
    }
    FIELD
        .find_iter(line)
        .map(|m| String::from(m.as_str()))
        .collect()
}

pub fn parse(contents: &str) -> Result<Dataset> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, tokens(line)))
        .filter(|(_, fields)| !fields.is_empty());

    let (_, header) = lines.next().ok_or(TreeError::EmptyHeader)?;
    let schema = Arc::new(AttributeSchema::new(header)?);

    let mut records = Vec::new();
    for (line, fields) in lines {
        if fields.len() != schema.len() {
            return Err(TreeError::MalformedRecord {
                line,
                expected: schema.len(),
                found: fields.len(),
            });
        }
        records.push(Record::new(fields));
    }
    Dataset::new(schema, records)
}

pub fn read<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    parse(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let data = parse("A  B\tLabel\na1 b1 Y\n\na2 b2   N\n").unwrap();
        assert_eq!(data.schema().label_name(), "Label");
        assert_eq!(data.len(), 2);
        assert_eq!(data.records()[1].value(1), Some("b2"));
        assert_eq!(data.records()[1].label(), Some("N"));
    }

    #[test]
    fn header_only_table_is_empty() {
        let data = parse("A Label\n").unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(matches!(parse("\n  \n"), Err(TreeError::EmptyHeader)));
    }

    #[test]
    fn short_row_reports_its_line() {
        match parse("A B Label\na1 b1 Y\n\na2 N\n") {
            Err(TreeError::MalformedRecord {
                line,
                expected,
                found,
            }) => assert_eq!((line, expected, found), (4, 3, 2)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        assert!(matches!(
            read("/nonexistent/decision-tree/input.tsv"),
            Err(TreeError::Io(_))
        ));
    }
}

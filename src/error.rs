use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("no rows to train on")]
    EmptyDataset,

    #[error("input has no header line")]
    EmptyHeader,

    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("attribute {attribute} takes more than two values: {values:?}")]
    NonBinaryAttribute { attribute: String, values: Vec<String> },

    #[error("precondition violated: {0}")]
    Precondition(&'static str),

    #[error("invalid max depth {0:?}, expected a non-negative integer")]
    InvalidDepth(String),

    #[error("{predicted} predictions for {actual} labeled rows")]
    LengthMismatch { predicted: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = TreeError::MalformedRecord {
            line: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(format!("{}", err), "line 3: expected 4 fields, found 2");

        let err = TreeError::InvalidDepth("-1".to_owned());
        assert!(format!("{}", err).contains("\"-1\""));

        let err = TreeError::NonBinaryAttribute {
            attribute: "color".to_owned(),
            values: vec!["red".to_owned(), "green".to_owned(), "blue".to_owned()],
        };
        assert!(format!("{}", err).contains("color"));
    }
}

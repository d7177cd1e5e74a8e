use crate::error::{Result, TreeError};
use std::fmt;

/// Fraction of predictions that differ from the labels they are scored against.
pub fn error_rate<P, A>(predicted: &[P], actual: &[A]) -> Result<f64>
where
    P: AsRef<str>,
    A: AsRef<str>,
{
    if predicted.len() != actual.len() {
        return Err(TreeError::LengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }
    if actual.is_empty() {
        return Err(TreeError::EmptyDataset);
    }
    let mut wrong = 0;
    for (guess, label) in predicted.iter().zip(actual.iter()) {
        if guess.as_ref() != label.as_ref() {
            wrong += 1;
        }
    }
    Ok(wrong as f64 / actual.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub train_error: f64,
    pub test_error: f64,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "error(train): {}", self.train_error)?;
        writeln!(f, "error(test): {}", self.test_error)
    }
}

//! Information-theoretic scores used to rank split attributes.
//!
//! All quantities are in bits. Callers must not pass an empty dataset: the
//! entropy of nothing is undefined, and the tree builder never asks for it.
use crate::dataset::Dataset;
use crate::distribution::Distribution;

/// Shannon entropy of a count distribution.
pub fn entropy_of(distribution: &Distribution) -> f64 {
    let total = distribution.total() as f64;
    -distribution
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(_, count)| count as f64 / total)
        .map(|frac| frac * frac.log2())
        .fold(0., |acc, v| acc + v)
}

/// Entropy of the label column.
pub fn entropy(data: &Dataset) -> f64 {
    debug_assert!(!data.is_empty(), "entropy of an empty dataset");
    entropy_of(&data.label_distribution())
}

/// Expected label entropy once `attribute` is known, weighted by how often
/// each of its values occurs.
pub fn conditional_entropy(data: &Dataset, attribute: usize) -> f64 {
    debug_assert!(!data.is_empty(), "conditional entropy of an empty dataset");
    let total = data.len() as f64;
    data.value_distribution(attribute)
        .iter()
        .map(|(value, count)| {
            let weight = count as f64 / total;
            weight * entropy_of(&data.label_distribution_where(attribute, value))
        })
        .fold(0., |acc, v| acc + v)
}

pub fn mutual_information(data: &Dataset, attribute: usize) -> f64 {
    entropy(data) - conditional_entropy(data, attribute)
}

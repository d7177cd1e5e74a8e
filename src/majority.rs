use crate::dataset::Dataset;
use crate::distribution::Distribution;

/// Most frequent value; among tied values the first one seen wins.
pub fn majority_of(distribution: &Distribution) -> Option<&str> {
    distribution
        .iter()
        .fold(None::<(&str, usize)>, |best, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
        .map(|(value, _)| value)
}

/// Majority label of `data`, or `None` when it has no rows.
pub fn majority_label(data: &Dataset) -> Option<String> {
    majority_of(&data.label_distribution()).map(str::to_owned)
}

use crate::dataset::Dataset;
use crate::information::mutual_information;

/// Picks the candidate with the highest mutual information against the
/// labels. Ties go to whichever candidate comes first in `candidates`.
///
/// Returns `None` only for an empty candidate list.
pub fn select_best_attribute(data: &Dataset, candidates: &[usize]) -> Option<usize> {
    let (first, rest) = candidates.split_first()?;
    let best = rest.iter().fold(
        (*first, mutual_information(data, *first)),
        |(best, best_info), &attribute| {
            let info = mutual_information(data, attribute);
            if info > best_info {
                (attribute, info)
            } else {
                (best, best_info)
            }
        },
    );
    Some(best.0)
}

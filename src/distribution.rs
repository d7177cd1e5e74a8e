/// Counts of string values, kept in the order each value was first seen.
///
/// Ordering is what makes majority ties deterministic: the earliest value
/// reaching the top count wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: Vec<(String, usize)>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.counts.iter_mut().find(|(seen, _)| seen == value) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((value.to_owned(), 1)),
        }
    }

    pub fn count(&self, value: &str) -> usize {
        self.counts
            .iter()
            .find(|(seen, _)| seen == value)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(value, count)| (value.as_str(), *count))
    }
}

impl<'a> std::iter::FromIterator<&'a str> for Distribution {
    fn from_iter<I: IntoIterator<Item = &'a str>>(values: I) -> Self {
        let mut distribution = Distribution::new();
        for value in values {
            distribution.add(value);
        }
        distribution
    }
}

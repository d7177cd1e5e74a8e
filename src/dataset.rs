use crate::distribution::Distribution;
use crate::error::{Result, TreeError};
use itertools::Itertools;
use std::ops::Range;
use std::sync::Arc;

/// Ordered attribute names; the last one names the label column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSchema {
    names: Vec<String>,
}

impl AttributeSchema {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(TreeError::EmptyHeader);
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    pub fn label_index(&self) -> usize {
        self.names.len() - 1
    }

    pub fn label_name(&self) -> &str {
        &self.names[self.label_index()]
    }

    /// Indices of every non-label attribute, in schema order.
    pub fn features(&self) -> Range<usize> {
        0..self.label_index()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn label(&self) -> Option<&str> {
        self.fields.last().map(String::as_str)
    }
}

impl<S: Into<String>> From<Vec<S>> for Record {
    fn from(fields: Vec<S>) -> Self {
        Record::new(fields.into_iter().map(Into::into).collect())
    }
}

/// Rows sharing one schema. Subsets are fresh copies of their rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Arc<AttributeSchema>,
    records: Vec<Record>,
}

impl Dataset {
    /// Rejects any record whose width differs from the schema. Reported line
    /// numbers assume the table layout: header on line 1, rows after it.
    pub fn new(schema: Arc<AttributeSchema>, records: Vec<Record>) -> Result<Self> {
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| record.len() != schema.len())
        {
            return Err(TreeError::MalformedRecord {
                line: index + 2,
                expected: schema.len(),
                found: record.len(),
            });
        }
        Ok(Self { schema, records })
    }

    pub fn schema(&self) -> &Arc<AttributeSchema> {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(Record::label)
    }

    pub fn label_distribution(&self) -> Distribution {
        self.labels().collect()
    }

    pub fn value_distribution(&self, attribute: usize) -> Distribution {
        self.records
            .iter()
            .filter_map(|record| record.value(attribute))
            .collect()
    }

    /// Label counts over the rows whose `attribute` equals `value`.
    pub fn label_distribution_where(&self, attribute: usize, value: &str) -> Distribution {
        self.records
            .iter()
            .filter(|record| record.value(attribute) == Some(value))
            .filter_map(Record::label)
            .collect()
    }

    /// Values taken by `attribute`, in first-seen order.
    pub fn distinct_values(&self, attribute: usize) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| record.value(attribute))
            .unique()
            .collect()
    }

    /// Copies rows into two subsets: those whose `attribute` equals `value`
    /// and all the others.
    pub fn split(&self, attribute: usize, value: &str) -> (Dataset, Dataset) {
        let (matching, rest): (Vec<Record>, Vec<Record>) = self
            .records
            .iter()
            .cloned()
            .partition(|record| record.value(attribute) == Some(value));
        (self.subset(matching), self.subset(rest))
    }

    fn subset(&self, records: Vec<Record>) -> Dataset {
        Dataset {
            schema: Arc::clone(&self.schema),
            records,
        }
    }
}

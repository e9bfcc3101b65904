//! Error types

use std::fmt;

/// What is wrong with a dataset record.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    PercentageOutOfRange(f64),
    EmptySeries,
    EmptyMetrics,
    EmptyGroup,
    DuplicateId,
}

/// A malformed record in one of the static datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetError {
    pub dataset: &'static str,
    pub record: String,
    pub problem: Problem,
}

impl DatasetError {
    pub fn new(dataset: &'static str, record: impl Into<String>, problem: Problem) -> Self {
        Self {
            dataset,
            record: record.into(),
            problem,
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset error in {} [{}]: ", self.dataset, self.record)?;
        match &self.problem {
            Problem::PercentageOutOfRange(v) => write!(f, "percentage {} outside 0-100", v),
            Problem::EmptySeries => f.write_str("series is empty"),
            Problem::EmptyMetrics => f.write_str("no metrics"),
            Problem::EmptyGroup => f.write_str("group has no children"),
            Problem::DuplicateId => f.write_str("duplicate id"),
        }
    }
}

impl std::error::Error for DatasetError {}

//! Error types for the data pipeline.

use thiserror::Error;

/// The sources handed to the merger do not line up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MergeError {
    #[error("no sources to merge")]
    NoSources,

    #[error("source '{name}' has {found} rows but '{reference}' has {expected}")]
    LengthMismatch {
        name: String,
        reference: String,
        expected: usize,
        found: usize,
    },

    #[error("source '{name}' row {index} is labelled '{found}' but '{reference}' has '{expected}'")]
    LabelMismatch {
        name: String,
        reference: String,
        index: usize,
        expected: String,
        found: String,
    },
}

/// A selector value that is neither `all` nor a four-digit year.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid year selection '{0}' (expected 'all' or a four-digit year)")]
pub struct SelectionError(pub String);

/// One or more sources failed to load; every failure is listed.
#[derive(Error, Debug)]
#[error("{} source(s) failed to load: {}", .failures.len(), summarize(.failures))]
pub struct LoadError {
    pub failures: Vec<SourceFailure>,
}

#[derive(Debug)]
pub struct SourceFailure {
    pub name: String,
    pub error: anyhow::Error,
}

fn summarize(failures: &[SourceFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {:#}", f.name, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

use std::path::PathBuf;

use thiserror::Error;

use crate::output;

/// A deletion request that resolved outside the designated root.
///
/// Fatal to the batch that contained it, never to the run.
#[derive(Debug, Error)]
#[error("refusing to delete {}: it resolves to {}, outside the cleanup root", .requested.display(), .resolved.display())]
pub struct PathViolation {
    pub requested: PathBuf,
    pub resolved: PathBuf,
}

/// One recorded failure, in insertion order.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub sequence: usize,
    pub message: String,
}

/// Append-only ledger of everything that went wrong during a run.
///
/// Created once at run start and read for the end-of-run summary.
/// With echoing on, each record is also printed the moment it lands.
#[derive(Debug, Default)]
pub struct ErrorAggregator {
    records: Vec<ErrorRecord>,
    echo: bool,
}

impl ErrorAggregator {
    pub fn new(echo: bool) -> Self {
        Self {
            records: Vec::new(),
            echo,
        }
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.echo {
            output::print_error(&message);
        }
        self.records.push(ErrorRecord {
            sequence: self.records.len(),
            message,
        });
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }
}

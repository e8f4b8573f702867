//! Column layout of the task export.

use serde::{Deserialize, Serialize};

use wsa_core::ConfigError;

/// Where the two columns the pipeline needs live, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestConfig {
    /// Task title column. Default 9 (column J).
    pub title_column: usize,
    /// Due date column. Default 18 (column S).
    pub due_date_column: usize,
    /// Whether the first row is a header to skip.
    pub has_header: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            title_column: 9,
            due_date_column: 18,
            has_header: true,
        }
    }
}

impl IngestConfig {
    /// Reject a layout that maps both fields to one column.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title_column == self.due_date_column {
            return Err(ConfigError::ColumnCollision(self.title_column));
        }
        Ok(())
    }

    /// Minimum row width that holds both columns.
    pub fn required_width(&self) -> usize {
        self.title_column.max(self.due_date_column) + 1
    }
}

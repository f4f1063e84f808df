//! Record identifiers, including client-synthesized placeholders.

use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identifier of a record held by the console.
///
/// Non-negative values are backend-assigned primary keys. Negative values are
/// placeholders synthesized for rows the backend returned without a key; they
/// only exist inside one list snapshot and never reach an update or delete
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Placeholder for the row at `position` (0-based) of a fetched list.
    pub fn placeholder(position: usize) -> Self {
        Self(-(position as i64 + 1))
    }

    /// True for client-synthesized ids that have no backend row.
    pub fn is_placeholder(&self) -> bool {
        self.0 < 0
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        s.trim()
            .parse::<i64>()
            .map(RecordId)
            .map_err(|_| CoreError::InvalidRecordId {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

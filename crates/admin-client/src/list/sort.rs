use crate::ClientError;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = ClientError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(ClientError::validation(format!(
                "Unknown sort direction '{other}' (expected asc or desc)"
            ))),
        }
    }
}

/// Active ordering of a list's visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: &'static str,
    pub direction: SortDirection,
}

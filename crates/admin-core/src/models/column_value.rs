use std::cmp::Ordering;

/// A displayed cell of a list row, used for filtering and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(String),
    Number(i64),
    Empty,
}

impl ColumnValue {
    /// Lowercased text used for substring filtering
    pub fn search_text(&self) -> String {
        match self {
            Self::Text(s) => s.to_lowercase(),
            Self::Number(n) => n.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Numbers compare numerically, text case-insensitively, empty cells first.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Empty, _) => Ordering::Less,
            (_, Self::Empty) => Ordering::Greater,
            (a, b) => a.search_text().cmp(&b.search_text()),
        }
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Option<&str>> for ColumnValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, ColumnValue::from)
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl std::fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Empty => Ok(()),
        }
    }
}

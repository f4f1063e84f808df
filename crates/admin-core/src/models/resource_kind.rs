use serde::{Deserialize, Serialize};

/// The record collections managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Students,
    Professors,
    Courses,
}

impl ResourceKind {
    /// Path segment under the admin base URL and in console routes
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Professors => "professors",
            Self::Courses => "courses",
        }
    }

    /// Singular display label ("Student", "Professor", "Course")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Students => "Student",
            Self::Professors => "Professor",
            Self::Courses => "Course",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Console routes.
//!
//! `/login`, `/dashboard`, `/students`, `/students/add`, `/students/edit/:id`,
//! mirrored for `/professors`. Empty and unknown paths resolve to login.

use admin_core::{RecordId, ResourceKind};

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    List(ResourceKind),
    Add(ResourceKind),
    Edit(ResourceKind, RecordId),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["dashboard"] => Route::Dashboard,
            [kind] => routed_kind(kind).map_or(Route::Login, Route::List),
            [kind, "add"] => routed_kind(kind).map_or(Route::Login, Route::Add),
            [kind, "edit", id] => match (routed_kind(kind), RecordId::from_str(id)) {
                (Some(kind), Ok(id)) => Route::Edit(kind, id),
                _ => Route::Login,
            },
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => String::from("/login"),
            Route::Dashboard => String::from("/dashboard"),
            Route::List(kind) => format!("/{kind}"),
            Route::Add(kind) => format!("/{kind}/add"),
            Route::Edit(kind, id) => format!("/{kind}/edit/{id}"),
        }
    }

    /// Every route except login requires an authenticated session.
    pub fn is_guarded(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

// Courses have no console pages
fn routed_kind(segment: &str) -> Option<ResourceKind> {
    match segment {
        "students" => Some(ResourceKind::Students),
        "professors" => Some(ResourceKind::Professors),
        _ => None,
    }
}

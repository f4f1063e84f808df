pub(crate) mod list_controller;
pub(crate) mod placeholder;
pub(crate) mod sort;

pub use list_controller::{DeleteOutcome, ListController};
pub use placeholder::assign_placeholder_ids;
pub use sort::{SortDirection, SortState};

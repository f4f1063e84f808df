use admin_core::{RecordId, ValidationErrors};

/// Lifecycle of an add/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Initial,
    LoadingExisting,
    Editing,
    Submitting,
    Submitted,
    /// Last failure message; the form moves back to `Editing` right after
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit was not possible in the current state
    Ignored,
    /// Nothing was sent; these checks failed
    Invalid(ValidationErrors),
    Saved,
}

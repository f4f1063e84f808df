//! Confirmation seam for destructive actions. Rendering the dialog belongs
//! to the front end.

use async_trait::async_trait;

/// Text of a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl ConfirmPrompt {
    /// Prompt for deleting the record labelled `name`.
    pub fn delete(kind_label: &str, name: &str) -> Self {
        Self {
            title: String::from("Confirm Delete"),
            message: format!(
                "Are you sure you want to delete {} {}?",
                kind_label.to_lowercase(),
                name
            ),
            confirm_text: String::from("Delete"),
            cancel_text: String::from("Cancel"),
        }
    }
}

#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// Resolve to `true` when the operator confirmed.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Non-interactive answer, e.g. for `--yes` on the command line.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl ConfirmDialog for AutoConfirm {
    async fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        self.0
    }
}

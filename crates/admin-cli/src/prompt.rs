use admin_client::{ConfirmDialog, ConfirmPrompt};

use std::io::{BufRead, Write};

use async_trait::async_trait;
use log::warn;

/// Asks on stderr and reads the answer from stdin. Anything but `y`/`yes`
/// declines.
pub struct TerminalConfirm;

#[async_trait]
impl ConfirmDialog for TerminalConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let question = format!(
            "{}: {} [{}/{}] ",
            prompt.title, prompt.message, prompt.confirm_text, prompt.cancel_text
        );

        let answer = tokio::task::spawn_blocking(move || {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "{question}");
            let _ = stderr.flush();

            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line),
            Ok(Err(e)) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
            Err(e) => {
                warn!("Confirmation prompt aborted: {}", e);
                false
            }
        }
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "delete"
    )
}

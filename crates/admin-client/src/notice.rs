use crate::ClientError;

use admin_config::NoticeConfig;

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, dismissible message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    /// How long the front end should keep it visible
    pub duration: Duration,
}

/// Publishes the latest notice. Cheap to clone; clones share the channel.
#[derive(Clone)]
pub struct Notifier {
    tx: Arc<watch::Sender<Option<Notice>>>,
    config: NoticeConfig,
}

impl Notifier {
    pub fn new(config: NoticeConfig) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            tx: Arc::new(tx),
            config,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.tx.send_replace(Some(Notice {
            message,
            level: NoticeLevel::Success,
            duration: self.config.success_duration(),
        }));
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.tx.send_replace(Some(Notice {
            message,
            level: NoticeLevel::Error,
            duration: self.config.error_duration(),
        }));
    }

    /// Error notice of the form "<context> <user message>"
    pub fn failure(&self, context: &str, err: &ClientError) {
        self.error(format!("{} {}", context, err.user_message()));
    }

    pub fn dismiss(&self) {
        self.tx.send_replace(None);
    }

    pub fn latest(&self) -> Option<Notice> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.tx.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NoticeConfig::default())
    }
}

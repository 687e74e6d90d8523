use async_trait::async_trait;
use std::time::Duration;

use super::{AutomationAction, AutomationRegistry};
use crate::error::RegistryError;

/// Latency the bundled catalog imitates when built with [`InMemoryRegistry::with_default_actions`].
pub const DEFAULT_LISTING_DELAY: Duration = Duration::from_millis(500);

/// The built-in action catalog.
pub fn default_actions() -> Vec<AutomationAction> {
    vec![
        AutomationAction::new("send_email", "Send Email", &["to", "subject", "body"]),
        AutomationAction::new(
            "generate_doc",
            "Generate Document",
            &["template", "recipient"],
        ),
        AutomationAction::new("slack_notify", "Slack Notification", &["channel", "message"]),
        AutomationAction::new("create_jira", "Create Jira Ticket", &["project", "summary"]),
    ]
}

/// A registry backed by a fixed list of actions, with an optional artificial delay.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    actions: Vec<AutomationAction>,
    delay: Duration,
}

impl InMemoryRegistry {
    /// A registry that answers immediately with `actions`.
    pub fn new(actions: Vec<AutomationAction>) -> Self {
        Self {
            actions,
            delay: Duration::ZERO,
        }
    }

    /// The built-in catalog, answering after [`DEFAULT_LISTING_DELAY`].
    pub fn with_default_actions() -> Self {
        Self::new(default_actions()).with_delay(DEFAULT_LISTING_DELAY)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl AutomationRegistry for InMemoryRegistry {
    async fn list_actions(&self) -> Result<Vec<AutomationAction>, RegistryError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.actions.clone())
    }
}

//! Automation registry: the catalog of actions an `Automated` step can run.
//!
//! The engine never talks to a concrete catalog. It depends on the
//! [`AutomationRegistry`] capability and works against a [`RegistrySnapshot`]
//! taken once per simulation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

mod memory;
mod snapshot;

pub use memory::{DEFAULT_LISTING_DELAY, InMemoryRegistry, default_actions};
pub use snapshot::RegistrySnapshot;

/// An action the automation backend knows how to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationAction {
    pub id: String,
    pub label: String,
    /// Names of the parameters the action requires, in display order.
    pub params: Vec<String>,
}

impl AutomationAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>, params: &[&str]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Required parameter names that are absent or empty in `configured`.
    pub fn missing_params(&self, configured: &[(String, String)]) -> Vec<&str> {
        self.params
            .iter()
            .filter(|name| {
                !configured
                    .iter()
                    .any(|(key, value)| key == *name && !value.is_empty())
            })
            .map(|name| name.as_str())
            .collect()
    }
}

/// Source of the automation catalog.
#[async_trait]
pub trait AutomationRegistry: Send + Sync {
    /// Lists every available action, in catalog order.
    async fn list_actions(&self) -> Result<Vec<AutomationAction>, RegistryError>;
}

/// Lists the registry's actions and indexes them for lookup.
pub async fn load_snapshot(
    registry: &dyn AutomationRegistry,
) -> Result<RegistrySnapshot, RegistryError> {
    let actions = registry.list_actions().await?;
    Ok(RegistrySnapshot::new(actions))
}

use ahash::AHashMap;

use super::AutomationAction;

/// A point-in-time copy of the automation catalog, indexed by action id.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    actions: Vec<AutomationAction>,
    index: AHashMap<String, usize>,
}

impl RegistrySnapshot {
    pub fn new(actions: Vec<AutomationAction>) -> Self {
        let mut index = AHashMap::with_capacity(actions.len());
        for (position, action) in actions.iter().enumerate() {
            // First entry wins on duplicate ids, like a linear search would.
            index.entry(action.id.clone()).or_insert(position);
        }
        Self { actions, index }
    }

    /// A snapshot with no actions; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn find(&self, action_id: &str) -> Option<&AutomationAction> {
        self.index.get(action_id).map(|&i| &self.actions[i])
    }

    pub fn actions(&self) -> &[AutomationAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

//! ProjectStore - the tracked project list.
//!
//! This layer defines no load/add/remove operations for projects;
//! population is entirely up to external collaborators writing to the
//! store directly, so there is nothing fallible here.

use tokio::sync::watch;

use crate::api::types::Project;
use crate::stores::cell::StoreCell;

/// Holds the ordered list of tracked projects, default empty.
pub struct ProjectStore {
    cell: StoreCell<Vec<Project>>,
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            cell: StoreCell::new(Vec::new()),
        }
    }

    /// Clone the current project list.
    pub fn get(&self) -> Vec<Project> {
        self.cell.get()
    }

    /// Replace the project list wholesale, preserving the given order.
    pub fn set(&self, projects: Vec<Project>) {
        self.cell.set(projects);
    }

    /// Subscribe to project list changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Project>> {
        self.cell.subscribe()
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            path: format!("/work/{name}"),
            config_path: format!("/work/{name}/buildstudio.config.yaml"),
            last_build: None,
            last_status: None,
        }
    }

    #[test]
    fn test_defaults_to_empty() {
        let store = ProjectStore::new();
        assert!(store.get().is_empty());
    }

    #[tokio::test]
    async fn test_set_preserves_order_and_notifies() {
        let store = ProjectStore::new();
        let mut rx = store.subscribe();

        let list = vec![project("beta"), project("alpha")];
        store.set(list.clone());

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), list);
        assert_eq!(store.get(), list);
    }
}

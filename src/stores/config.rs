//! ConfigStore - the active build studio configuration.
//!
//! Purely a shared, subscribable slot: any component may overwrite it and
//! readers observe every change. No validation, no remote interaction.

use tokio::sync::watch;

use crate::api::types::BuildStudioConfig;
use crate::stores::cell::StoreCell;

/// Holds at most one [`BuildStudioConfig`], or `None` when no project
/// config is active.
pub struct ConfigStore {
    cell: StoreCell<Option<BuildStudioConfig>>,
}

impl ConfigStore {
    /// Create an empty store (no active config).
    pub fn new() -> Self {
        Self {
            cell: StoreCell::new(None),
        }
    }

    /// Clone the current config, if any.
    pub fn get(&self) -> Option<BuildStudioConfig> {
        self.cell.get()
    }

    /// Replace the active config (`None` clears it).
    pub fn set(&self, config: Option<BuildStudioConfig>) {
        self.cell.set(config);
    }

    /// Subscribe to config changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<BuildStudioConfig>> {
        self.cell.subscribe()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BuildConfig;

    fn sample_config() -> BuildStudioConfig {
        BuildStudioConfig {
            builds: vec![BuildConfig {
                name: "b1".to_string(),
                platform: "linux".to_string(),
                language: None,
                command: "make".to_string(),
                container: None,
            }],
            package: None,
        }
    }

    #[test]
    fn test_defaults_to_unset() {
        let store = ConfigStore::new();
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_set_is_observed_untransformed() {
        let store = ConfigStore::new();
        let mut rx = store.subscribe();

        let config = sample_config();
        store.set(Some(config.clone()));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref(), Some(&config));
        assert_eq!(store.get(), Some(config));
    }

    #[test]
    fn test_set_none_clears() {
        let store = ConfigStore::new();
        store.set(Some(sample_config()));
        store.set(None);
        assert!(store.get().is_none());
    }
}

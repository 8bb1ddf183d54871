//! PluginStore - the installed plugin list, synchronized over the remote
//! boundary.
//!
//! The store is a cache of the backend's last successful `list_plugins`
//! response. `load_plugins` replaces the cache wholesale; `add_plugin` and
//! `remove_plugin` mutate nothing locally, they ask the backend and then
//! re-load. Failures are logged here and also returned to the caller, who
//! may ignore them to keep fire-and-forget semantics.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::{watch, Mutex};

use crate::api::types::{PluginInfo, RemoteError};
use crate::remote::{RemoteInvoke, OP_ADD_PLUGIN, OP_LIST_PLUGINS, OP_REMOVE_PLUGIN};
use crate::stores::cell::StoreCell;

/// Directory used for post-add/remove refreshes until a `load_plugins`
/// call succeeds and records the directory it actually loaded from.
pub const DEFAULT_PLUGIN_DIR: &str = "../../plugins";

/// Holds the ordered list of installed plugins, default empty.
pub struct PluginStore {
    remote: Arc<dyn RemoteInvoke>,
    cell: StoreCell<Vec<PluginInfo>>,
    /// Directory of the last successful load; refresh target for add/remove
    active_dir: Mutex<Option<String>>,
}

impl PluginStore {
    /// Create an empty store backed by the given transport.
    pub fn new(remote: Arc<dyn RemoteInvoke>) -> Self {
        Self {
            remote,
            cell: StoreCell::new(Vec::new()),
            active_dir: Mutex::new(None),
        }
    }

    /// Clone the current plugin list.
    pub fn get(&self) -> Vec<PluginInfo> {
        self.cell.get()
    }

    /// Subscribe to plugin list changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<PluginInfo>> {
        self.cell.subscribe()
    }

    /// Load the plugin list from `plugin_dir`, replacing the store contents.
    ///
    /// On success the response sequence is stored verbatim (no reordering,
    /// filtering, or deduplication) and `plugin_dir` becomes the refresh
    /// target for later [`add_plugin`](Self::add_plugin) /
    /// [`remove_plugin`](Self::remove_plugin) calls. On any failure the
    /// store is reset to empty, a diagnostic is logged, and the error is
    /// returned.
    pub async fn load_plugins(&self, plugin_dir: &str) -> Result<(), RemoteError> {
        match self.fetch(plugin_dir).await {
            Ok(plugins) => {
                log::debug!(
                    "Loaded {} plugin(s) from '{plugin_dir}'",
                    plugins.len()
                );
                *self.active_dir.lock().await = Some(plugin_dir.to_string());
                self.cell.set(plugins);
                Ok(())
            }
            Err(e) => {
                log::warn!("Failed to load plugins from '{plugin_dir}': {e}");
                self.cell.set(Vec::new());
                Err(e)
            }
        }
    }

    /// Ask the backend to install the plugin at `plugin_path`, then refresh.
    ///
    /// Nothing is applied locally: on failure the store keeps its prior
    /// contents, the error is logged and returned. On success the store is
    /// refreshed from the active plugin directory, so the final contents
    /// are whatever that directory now lists.
    pub async fn add_plugin(&self, plugin_path: &str) -> Result<(), RemoteError> {
        if let Err(e) = self
            .remote
            .invoke(OP_ADD_PLUGIN, json!({ "path": plugin_path }))
            .await
        {
            log::warn!("Failed to add plugin '{plugin_path}': {e}");
            return Err(e);
        }
        self.refresh().await
    }

    /// Ask the backend to uninstall the plugin named `name`, then refresh.
    ///
    /// Same failure policy as [`add_plugin`](Self::add_plugin).
    pub async fn remove_plugin(&self, name: &str) -> Result<(), RemoteError> {
        if let Err(e) = self
            .remote
            .invoke(OP_REMOVE_PLUGIN, json!({ "name": name }))
            .await
        {
            log::warn!("Failed to remove plugin '{name}': {e}");
            return Err(e);
        }
        self.refresh().await
    }

    async fn fetch(&self, plugin_dir: &str) -> Result<Vec<PluginInfo>, RemoteError> {
        let response = self
            .remote
            .invoke(OP_LIST_PLUGINS, json!({ "pluginDir": plugin_dir }))
            .await?;

        serde_json::from_value(response).map_err(|e| RemoteError::BadResponse {
            message: format!("{OP_LIST_PLUGINS} returned an unexpected shape: {e}"),
        })
    }

    /// Re-load from the last successfully loaded directory, falling back to
    /// [`DEFAULT_PLUGIN_DIR`] when the store has never loaded.
    async fn refresh(&self) -> Result<(), RemoteError> {
        let dir = self
            .active_dir
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| DEFAULT_PLUGIN_DIR.to_string());
        self.load_plugins(&dir).await
    }
}

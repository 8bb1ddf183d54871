//! LocalBackend - a filesystem implementation of the remote boundary.
//!
//! Serves the same operation names a shell backend would, directly against
//! the local filesystem: plugin discovery by manifest scan, plugin
//! install/uninstall under a managed plugin root, and YAML config loading.
//!
//! # Plugin directory layout
//!
//! ```text
//! <plugin dir>/
//! ├── formatter/
//! │   └── plugin.json     # JSON manifest
//! ├── linter/
//! │   └── plugin.yaml     # YAML manifest
//! └── bare-plugin/        # no manifest: a default entry is synthesized
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::api::types::{BuildStudioConfig, PluginInfo, RemoteError};
use crate::remote::{
    RemoteInvoke, OP_ADD_PLUGIN, OP_LIST_PLUGINS, OP_READ_CONFIG, OP_REMOVE_PLUGIN,
};

/// Partial manifest as written by plugin authors.
///
/// Every field is optional; missing ones fall back to the same defaults
/// a manifest-less directory gets.
#[derive(Debug, Default, Deserialize)]
struct PluginManifest {
    name: Option<String>,
    author: Option<String>,
    version: Option<String>,
    description: Option<String>,
}

/// Backend serving store operations from the local filesystem.
///
/// `plugin_root` is the managed directory that `add_plugin` installs into
/// and `remove_plugin` deletes from. `list_plugins` scans whatever
/// directory the payload names, which need not be the managed root.
pub struct LocalBackend {
    plugin_root: PathBuf,
}

impl LocalBackend {
    /// Create a backend managing plugins under `plugin_root`.
    pub fn new(plugin_root: PathBuf) -> Self {
        Self { plugin_root }
    }

    async fn list_plugins(&self, plugin_dir: String) -> Result<Value, RemoteError> {
        let plugins = spawn_scan(PathBuf::from(plugin_dir)).await?;
        serde_json::to_value(plugins).map_err(|e| RemoteError::BadResponse {
            message: format!("Failed to encode plugin listing: {e}"),
        })
    }

    async fn add_plugin(&self, path: String) -> Result<Value, RemoteError> {
        let source = PathBuf::from(&path);
        let root = self.plugin_root.clone();

        tokio::task::spawn_blocking(move || {
            if !source.is_dir() {
                return Err(RemoteError::Rejected {
                    message: format!("Plugin path is not a directory: {}", source.display()),
                });
            }

            let dir_name = source
                .file_name()
                .ok_or_else(|| RemoteError::Rejected {
                    message: format!("Plugin path has no directory name: {}", source.display()),
                })?
                .to_owned();

            fs::create_dir_all(&root).map_err(|e| RemoteError::Rejected {
                message: format!("Failed to create plugin root: {e}"),
            })?;

            let dest = root.join(&dir_name);
            if dest.exists() {
                return Err(RemoteError::Rejected {
                    message: format!(
                        "A plugin directory named '{}' is already installed",
                        dir_name.to_string_lossy()
                    ),
                });
            }

            copy_dir_all(&source, &dest).map_err(|e| RemoteError::Rejected {
                message: format!("Failed to install plugin: {e}"),
            })?;

            log::info!(
                "Plugin installed: source={}, dest={}",
                source.display(),
                dest.display()
            );
            Ok(Value::Null)
        })
        .await
        .map_err(join_error)?
    }

    async fn remove_plugin(&self, name: String) -> Result<Value, RemoteError> {
        let root = self.plugin_root.clone();

        tokio::task::spawn_blocking(move || {
            let installed = scan_plugin_dir(&root);
            let found = installed.into_iter().find(|p| p.name == name);

            let plugin = found.ok_or_else(|| RemoteError::Rejected {
                message: format!("No installed plugin named '{name}'"),
            })?;

            fs::remove_dir_all(&plugin.path).map_err(|e| RemoteError::Rejected {
                message: format!("Failed to remove plugin '{name}': {e}"),
            })?;

            log::info!("Plugin removed: name={name}, path={}", plugin.path);
            Ok(Value::Null)
        })
        .await
        .map_err(join_error)?
    }

    async fn read_config(&self, path: String) -> Result<Value, RemoteError> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RemoteError::Rejected {
                message: format!("Failed to read config '{path}': {e}"),
            })?;

        let config: BuildStudioConfig =
            serde_yaml::from_str(&content).map_err(|e| RemoteError::Rejected {
                message: format!("Failed to parse config '{path}': {e}"),
            })?;

        serde_json::to_value(config).map_err(|e| RemoteError::BadResponse {
            message: format!("Failed to encode config: {e}"),
        })
    }
}

#[async_trait]
impl RemoteInvoke for LocalBackend {
    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, RemoteError> {
        log::debug!("LocalBackend invoke: operation={operation}");
        match operation {
            OP_LIST_PLUGINS => self.list_plugins(required_str(&payload, "pluginDir")?).await,
            OP_ADD_PLUGIN => self.add_plugin(required_str(&payload, "path")?).await,
            OP_REMOVE_PLUGIN => self.remove_plugin(required_str(&payload, "name")?).await,
            OP_READ_CONFIG => self.read_config(required_str(&payload, "path")?).await,
            other => Err(RemoteError::Rejected {
                message: format!("Unknown operation: {other}"),
            }),
        }
    }
}

/// Extract a required string field from an operation payload.
fn required_str(payload: &Value, key: &str) -> Result<String, RemoteError> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| RemoteError::Rejected {
            message: format!("Payload is missing string field '{key}'"),
        })
}

fn join_error(e: tokio::task::JoinError) -> RemoteError {
    RemoteError::Transport {
        message: format!("Blocking task failed: {e}"),
    }
}

async fn spawn_scan(dir: PathBuf) -> Result<Vec<PluginInfo>, RemoteError> {
    tokio::task::spawn_blocking(move || scan_plugin_dir(&dir))
        .await
        .map_err(join_error)
}

/// Scan a directory for plugin subdirectories and read their manifests.
///
/// An unreadable root yields an empty listing rather than an error, so a
/// fresh installation with no plugin directory behaves like an empty one.
fn scan_plugin_dir(dir: &Path) -> Vec<PluginInfo> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read plugin directory '{}': {e}", dir.display());
            return Vec::new();
        }
    };

    let mut plugins: Vec<PluginInfo> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .map(|path| read_manifest(&path))
        .collect();

    // read_dir order is platform dependent; keep listings stable
    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    plugins
}

/// Build the `PluginInfo` for one plugin directory.
///
/// Prefers `plugin.json`, then `plugin.yaml`. A missing or unparseable
/// manifest produces a default entry named after the directory, so a
/// half-broken plugin still shows up in the listing.
fn read_manifest(dir: &Path) -> PluginInfo {
    let json_path = dir.join("plugin.json");
    let yaml_path = dir.join("plugin.yaml");

    let manifest = if json_path.exists() {
        parse_manifest(&json_path, |content| serde_json::from_str(content).ok())
    } else if yaml_path.exists() {
        parse_manifest(&yaml_path, |content| serde_yaml::from_str(content).ok())
    } else {
        None
    };

    let manifest = manifest.unwrap_or_default();
    let dir_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string());

    PluginInfo {
        name: manifest.name.unwrap_or(dir_name),
        author: manifest.author.unwrap_or_else(|| "Unknown".to_string()),
        version: manifest.version.unwrap_or_else(|| "0.1.0".to_string()),
        description: manifest
            .description
            .unwrap_or_else(|| "Plugin description not available".to_string()),
        path: dir.to_string_lossy().to_string(),
    }
}

fn parse_manifest(
    path: &Path,
    parse: impl Fn(&str) -> Option<PluginManifest>,
) -> Option<PluginManifest> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let parsed = parse(&content);
            if parsed.is_none() {
                log::warn!("Unparseable plugin manifest: {}", path.display());
            }
            parsed
        }
        Err(e) => {
            log::warn!("Cannot read plugin manifest '{}': {e}", path.display());
            None
        }
    }
}

fn copy_dir_all(source: &Path, dest: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

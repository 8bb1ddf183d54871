//! Remote-invoke boundary - abstraction over the backend call substrate.
//!
//! Stores never talk to a concrete backend. They hold an
//! `Arc<dyn RemoteInvoke>` and issue named operations with JSON payloads;
//! what sits on the other side (a webview IPC bridge, an in-process
//! [`LocalBackend`](crate::backend::LocalBackend), a test fake) is the
//! caller's choice.

pub mod invoke;

pub use invoke::RemoteInvoke;

/// Operation name: list plugin manifests under a directory.
pub const OP_LIST_PLUGINS: &str = "list_plugins";
/// Operation name: install a plugin from a path.
pub const OP_ADD_PLUGIN: &str = "add_plugin";
/// Operation name: uninstall a plugin by name.
pub const OP_REMOVE_PLUGIN: &str = "remove_plugin";
/// Operation name: read a build studio config file.
pub const OP_READ_CONFIG: &str = "read_config";

//! State-store layer for the Build Studio shell.
//!
//! Three observable stores mirror data owned by an opaque backend:
//!
//! - [`stores::ConfigStore`] - the active build configuration, set directly
//!   by callers
//! - [`stores::PluginStore`] - installed plugins, synchronized through
//!   remote load/add/remove operations
//! - [`stores::ProjectStore`] - tracked projects, populated by external
//!   collaborators
//!
//! Each store holds exactly one snapshot: its empty default or the last
//! successfully fetched value. Updates replace the snapshot wholesale and
//! notify every subscriber.
//!
//! The stores reach the backend only through the [`remote::RemoteInvoke`]
//! trait, so the transport is injectable: a shell IPC bridge in
//! production, [`backend::LocalBackend`] for headless use, a scripted fake
//! in tests.

pub mod api;
pub mod backend;
pub mod remote;
pub mod stores;

pub use api::types::{
    BuildConfig, BuildStudioConfig, PackageConfig, PluginInfo, Project, RemoteError,
};
pub use backend::LocalBackend;
pub use remote::RemoteInvoke;
pub use stores::{ConfigStore, PluginStore, ProjectStore, StoreCell};

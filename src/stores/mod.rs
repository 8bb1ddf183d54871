//! Observable state stores mirroring backend data.
//!
//! Each store is an owned, independently constructible container (no
//! module-level singletons) holding one snapshot: either its empty default
//! or the most recent successfully fetched value. Updates are full
//! replaces; subscribers observe every change.

pub mod cell;
pub mod config;
pub mod plugins;
pub mod projects;

pub use cell::StoreCell;
pub use config::ConfigStore;
pub use plugins::PluginStore;
pub use projects::ProjectStore;

//! In-process backend for running the stores without a webview shell.

pub mod local;

pub use local::LocalBackend;

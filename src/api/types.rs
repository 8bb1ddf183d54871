//! Data types shared between the stores and the remote backend.
//!
//! These mirror the shapes the backend returns verbatim: no generated
//! identifiers, no derived fields. A store snapshot is exactly the last
//! successful backend response.

use serde::{Deserialize, Serialize};

/// One build target definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Human-readable target name
    pub name: String,
    /// Target platform (e.g., "linux", "windows")
    pub platform: String,
    /// Source language, if declared
    pub language: Option<String>,
    /// Shell command that performs the build
    pub command: String,
    /// Container image to build inside, if any
    pub container: Option<String>,
}

/// Optional packaging metadata attached to a studio config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageConfig {
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: Option<Vec<String>>,
}

/// Root configuration object for one project.
///
/// A `ConfigStore` holds at most one of these (or none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildStudioConfig {
    /// Build targets, in declaration order
    pub builds: Vec<BuildConfig>,
    /// Packaging section, if present
    pub package: Option<PackageConfig>,
}

/// One installed plugin's manifest, as discovered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: String,
    pub author: String,
    pub version: String,
    pub description: String,
    /// Directory the plugin was discovered in
    pub path: String,
}

/// One tracked project and its last build outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: String,
    pub config_path: String,
    /// Timestamp of the last build, if one ran
    pub last_build: Option<String>,
    /// Outcome of the last build, if one ran
    pub last_status: Option<String>,
}

/// Failure of a remote invocation.
///
/// The stores treat all three variants identically ("the call failed"); the
/// variants exist so diagnostics can say whether the transport broke, the
/// backend refused, or the response had an unexpected shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RemoteError {
    /// The call never completed (process boundary, I/O, channel closed)
    Transport { message: String },
    /// The backend received the call and refused it
    Rejected { message: String },
    /// The backend answered, but the response did not decode
    BadResponse { message: String },
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Transport { message } => write!(f, "transport error: {message}"),
            RemoteError::Rejected { message } => write!(f, "rejected: {message}"),
            RemoteError::BadResponse { message } => write!(f, "bad response: {message}"),
        }
    }
}

impl std::error::Error for RemoteError {}

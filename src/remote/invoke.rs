//! RemoteInvoke trait: store → backend abstraction boundary.
//!
//! Key design principle: the stores do NOT know how calls cross the process
//! boundary. Cancellation and timeouts, if any, belong to the implementor.

use async_trait::async_trait;
use serde_json::Value;

use crate::api::types::RemoteError;

/// Abstract interface for the asynchronous request/response boundary.
///
/// Implemented by whatever carries calls to the backend. Stores are handed
/// an `Arc<dyn RemoteInvoke>` at construction so tests can substitute a
/// fake transport.
#[async_trait]
pub trait RemoteInvoke: Send + Sync {
    /// Issue a named operation and await its response.
    ///
    /// # Arguments
    /// * `operation` - Operation name (see the `OP_*` constants)
    /// * `payload` - JSON arguments for the operation
    ///
    /// # Returns
    /// * `Ok(Value)` - The backend's response, undecoded
    /// * `Err(RemoteError)` - Transport failure or backend rejection
    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, RemoteError>;
}

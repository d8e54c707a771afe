//! The logged-and-swallowed invocation wrapper.
//!
//! [`safe_invoke`] awaits one invocation and turns its outcome into an
//! `Option`. Failures never reach the caller; they are written to the log
//! according to their [`FailureKind`]:
//!
//! - client-reported: the error, then its details payload under `Details:`
//! - unknown: the error behind the `==>` marker

use std::future::Future;

use crate::clients::{FailureKind, InvokeError};

/// Awaits `call` and returns its value, or logs the failure and returns `None`.
///
/// # Example
///
/// ```rust
/// use shopware_api::clients::{InvalidOperationError, InvokeError};
/// use shopware_api::store::safe_invoke;
///
/// # tokio_test::block_on(async {
/// let ok = safe_invoke("readContext get /context", async { Ok::<_, InvokeError>(7) }).await;
/// assert_eq!(ok, Some(7));
///
/// let failed: Option<u32> = safe_invoke("broken", async {
///     Err(InvalidOperationError::Malformed { operation: "broken".to_string() }.into())
/// })
/// .await;
/// assert_eq!(failed, None);
/// # });
/// ```
pub async fn safe_invoke<T, F>(operation: &str, call: F) -> Option<T>
where
    F: Future<Output = Result<T, InvokeError>>,
{
    match call.await {
        Ok(value) => Some(value),
        Err(error) => {
            report_failure(operation, &error);
            None
        }
    }
}

/// Writes a failed invocation to the log and returns its classification.
pub fn report_failure(operation: &str, error: &InvokeError) -> FailureKind {
    match error {
        InvokeError::Client(client_error) => {
            let status = client_error.status;
            tracing::error!(operation, status, "{error}");
            tracing::error!(operation, status, "Details: {}", client_error.details);
        }
        InvokeError::Unknown(_) => {
            tracing::error!(operation, error = ?error, "==> {error}");
        }
    }
    error.kind()
}

//! Hook for errors that the fetch functions absorb.
//!
//! Every public `fetch_*` method degrades to an empty result on failure.
//! Before it does, the error is handed to the client's [`FetchObserver`], so
//! callers that need stricter visibility can plug in their own sink without
//! changing the return types.

use crate::backend::Backend;
use crate::error::{ErrorKind, SourceError};

/// Receives errors swallowed at the adapter boundary.
pub trait FetchObserver: Send + Sync {
    /// Called once per failed fetch, right before the empty result is returned.
    ///
    /// `operation` is the public method name, e.g. `"fetch_products"`.
    fn on_error(&self, backend: Backend, operation: &'static str, error: &SourceError);
}

/// Default observer: writes each absorbed error to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_error(&self, backend: Backend, operation: &'static str, error: &SourceError) {
        match error.kind() {
            ErrorKind::Configuration => tracing::warn!(
                %backend,
                operation,
                error = %error,
                "backend not configured; returning empty result"
            ),
            kind => tracing::error!(
                %backend,
                operation,
                ?kind,
                error = %error,
                "fetch failed; returning empty result"
            ),
        }
    }
}

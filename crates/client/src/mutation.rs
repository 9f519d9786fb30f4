//! Mutation dispatcher.
//!
//! Runs one mutation and collapses its outcome to a boolean, reporting
//! failures through a [`Notifier`]. There is no retry and no partial success.

use std::future::Future;

use tracing::warn;

use crate::error::Result;
use crate::notify::{MessageKey, Notifier};

/// Await `mutation`; on error notify with `message_key` and return `false`.
pub async fn execute_mutation<T, F, N>(mutation: F, message_key: MessageKey, notifier: &N) -> bool
where
    F: Future<Output = Result<T>>,
    N: Notifier + ?Sized,
{
    match mutation.await {
        Ok(_) => true,
        Err(e) => {
            warn!(message_key = message_key.as_str(), error = %e, "Mutation failed");
            notifier.notify_error(message_key, Some(&e));
            false
        }
    }
}

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::Result;

const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Runs `op`, retrying exactly once after a short delay if the first
/// attempt fails with a transient transport error. Anything else is
/// surfaced immediately.
pub async fn with_retry<T, F, Fut>(what: &str, op: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match op().await {
        Ok(value) => Ok(value),
        Err(e) if e.is_transient() => {
            warn!("⏳ {} failed ({}), retrying once", what, e);
            tokio::time::sleep(RETRY_DELAY).await;
            op().await
        }
        Err(e) => Err(e),
    }
}

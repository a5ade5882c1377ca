//! Shared Runtime

use tokio::runtime::Builder;

/// Run a future to completion on a single-threaded runtime.
pub fn block_on<F>(future: F) -> crate::Result<F::Output>
where
    F: std::future::Future,
{
    let runtime = Builder::new_current_thread().enable_all().build()?;
    Ok(runtime.block_on(future))
}

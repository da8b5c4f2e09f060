/// Global Tokio runtime for async HTTP operations
///
/// eframe owns the main thread's frame loop, but reqwest requires a tokio
/// runtime. This static runtime bridges the two by:
/// 1. Providing a tokio context for reqwest to execute in
/// 2. Letting tasks report back through the app's event channel, which the
///    frame loop drains in `on_tick`
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = some_async_operation().await;
///     let _ = event_tx.send(AppEvent::SomeResult(result)).await;
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});

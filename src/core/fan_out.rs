use crate::domain::ports::Timer;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawns one delayed computation per identifier. Every task is started
/// before this returns, so all delays run side by side.
pub fn spawn_delayed<Tm, T, F>(timer: &Arc<Tm>, ids: &[u32], build: F) -> Vec<JoinHandle<T>>
where
    Tm: Timer,
    T: Send + 'static,
    F: Fn(u32) -> T + Copy + Send + 'static,
{
    ids.iter()
        .map(|&id| {
            let timer = Arc::clone(timer);
            tokio::spawn(async move {
                timer.sleep(id).await;
                build(id)
            })
        })
        .collect()
}

/// Waits for every handle. Results come back in handle order, whatever
/// order the tasks finished in.
pub async fn join_in_order<T>(handles: Vec<JoinHandle<T>>) -> Result<Vec<T>> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }
    Ok(results)
}

//! Incremental batch scheduling for long candidate scans.

use std::time::Duration;

/// Batch sizing for a relationship scan: how many candidates are examined
/// before the scan yields, and how long it sleeps between batches.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub batch_size: usize,
    pub yield_delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 20, yield_delay: Duration::from_millis(30) }
    }
}

/// Visit every item in list order, sleeping between batches so other tasks on
/// the runtime stay responsive. A zero batch size is treated as one.
pub async fn for_each_in_batches<T, F>(items: &[T], config: BatchConfig, mut visit: F)
where
    F: FnMut(&T),
{
    let mut chunks = items.chunks(config.batch_size.max(1)).peekable();
    while let Some(chunk) = chunks.next() {
        for item in chunk {
            visit(item);
        }
        if chunks.peek().is_some() {
            tokio::time::sleep(config.yield_delay).await;
        }
    }
}

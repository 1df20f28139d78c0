use crate::domain::model::DEFAULT_DELAY_MS;
use crate::domain::ports::Timer;
use std::future::Future;
use std::time::Duration;

/// Same delay for every identifier.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl Timer for FixedDelay {
    fn sleep(&self, _id: u32) -> impl Future<Output = ()> + Send + 'static {
        tokio::time::sleep(self.delay)
    }
}

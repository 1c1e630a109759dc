use std::{future::Future, time::Duration};

use tokio::task::JoinHandle;

/// Holds at most one delayed task. Scheduling a new task aborts the previous one
/// if its delay has not elapsed yet.
///
/// Once the delay elapses the task is spawned on its own, so cancelling after
/// that point leaves the running task alone.
#[derive(Default)]
pub struct Debouncer {
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { timer: None }
    }

    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(task);
        }));
    }

    /// Returns `true` if a timer was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

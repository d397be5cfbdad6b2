use std::collections::HashMap;

use tokio::task::JoinHandle;
use tracing::trace;

/// Background tasks by key. Spawning under a key that is still running
/// aborts the older task, so at most one fetch or timer per key is live.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, key: &str, task: JoinHandle<()>) {
        self.tasks.retain(|_, handle| !handle.is_finished());
        if let Some(previous) = self.tasks.insert(key.to_string(), task) {
            trace!("Replacing task '{}'", key);
            previous.abort();
        }
    }

    #[cfg(test)]
    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|handle| !handle.is_finished())
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

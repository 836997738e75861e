use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use commons::log::debug;
use futures::Future;
use tokio::runtime::Handle;

pub struct BackgroundService {
    runtime: Handle,
    tasks: Arc<AtomicUsize>,
}

impl BackgroundService {
    pub fn new(runtime: Handle) -> Self {
        BackgroundService {
            runtime,
            tasks: Arc::default(),
        }
    }

    pub fn run_in_background<Fut>(&self, future: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let tasks = self.tasks.clone();
        tasks.fetch_add(1, Ordering::Relaxed);
        self.runtime.spawn(async move {
            future.await;
            tasks.fetch_sub(1, Ordering::Relaxed);
        });
    }

    pub async fn wait_on_tasks(&self) {
        while !self.zero_tasks() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    fn zero_tasks(&self) -> bool {
        let task_count = self.tasks.load(Ordering::Relaxed);
        debug!("{} running tasks", task_count);
        task_count == 0
    }
}

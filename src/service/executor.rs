//! Runs backend calls off the UI thread and hands back a pollable promise.

use std::future::Future;

use poll_promise::Promise;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

/// Native: a small tokio runtime. Browser: the JS event loop.
#[derive(Clone)]
pub struct Executor {
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Arc<tokio::runtime::Runtime>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Executor {
    pub fn new(worker_threads: usize) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name("forensic-net")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    pub fn spawn<T, F>(&self, future: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let (sender, promise) = Promise::new();
        self.runtime.spawn(async move {
            sender.send(future.await);
        });
        promise
    }
}

#[cfg(target_arch = "wasm32")]
impl Executor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn spawn<T, F>(&self, future: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + 'static,
    {
        let (sender, promise) = Promise::new();
        wasm_bindgen_futures::spawn_local(async move {
            sender.send(future.await);
        });
        promise
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn spawned_future_resolves_promise() {
        let executor = Executor::new(1).unwrap();
        let promise = executor.spawn(async { 6 * 7 });
        assert_eq!(promise.block_and_take(), 42);
    }

    #[test]
    fn promises_resolve_independently() {
        let executor = Executor::new(2).unwrap();
        let slow = executor.spawn(async {
            tokio::time::sleep(std::time::Duration::from_millis(30)).await;
            "slow"
        });
        let fast = executor.spawn(async { "fast" });

        assert_eq!(fast.block_and_take(), "fast");
        assert_eq!(slow.block_and_take(), "slow");
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Provides an [`Executor`] trait that runs request futures off the caller's task, along with
//! a Tokio backed implementation.
//!
//! Generated clients use the executor for their blocking, callable, and callback based variants.
//! The async variant never touches it.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A boxed unit of work handed to an [`Executor`]
pub type Task<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Runs futures either in the background or to completion on the calling thread.
pub trait Executor: Debug + Send + Sync {
    /// Run `task` in the background. The executor owns the task until it completes.
    fn spawn(&self, task: Task<'static>);

    /// Run `task` to completion, blocking the current thread until it finishes.
    ///
    /// Implementations must support being called from inside an async runtime as well as from a
    /// plain thread.
    fn block_on(&self, task: Task<'_>);
}

impl<T> Executor for Arc<T>
where
    T: Executor + ?Sized,
{
    fn spawn(&self, task: Task<'static>) {
        T::spawn(self, task)
    }

    fn block_on(&self, task: Task<'_>) {
        T::block_on(self, task)
    }
}

/// Wrapper type for a sharable [`Executor`]
#[derive(Clone, Debug)]
pub struct SharedExecutor(Arc<dyn Executor>);

impl SharedExecutor {
    /// Create a new `SharedExecutor` from an `Executor`
    pub fn new(executor: impl Executor + 'static) -> Self {
        Self(Arc::new(executor))
    }
}

impl From<Arc<dyn Executor>> for SharedExecutor {
    fn from(executor: Arc<dyn Executor>) -> Self {
        SharedExecutor(executor)
    }
}

impl Executor for SharedExecutor {
    fn spawn(&self, task: Task<'static>) {
        self.0.spawn(task)
    }

    fn block_on(&self, task: Task<'_>) {
        self.0.block_on(task)
    }
}

/// Returns the default executor based on the features enabled
///
/// When called from inside a multi-threaded Tokio runtime, that runtime is used. Otherwise the
/// work is sent to a lazily created, process wide, multi-threaded runtime.
#[cfg(feature = "rt-tokio")]
pub fn default_executor() -> Option<SharedExecutor> {
    match tokio_impl::TokioExecutor::ambient() {
        Some(ambient) => Some(SharedExecutor::new(ambient)),
        None => tokio_impl::shared_pool().map(SharedExecutor::new),
    }
}

/// Returns the default executor based on the features enabled
#[cfg(not(feature = "rt-tokio"))]
pub fn default_executor() -> Option<SharedExecutor> {
    None
}

#[cfg(feature = "rt-tokio")]
pub use tokio_impl::TokioExecutor;

#[cfg(feature = "rt-tokio")]
mod tokio_impl {
    use super::{Executor, Task};
    use once_cell::sync::OnceCell;
    use std::fmt;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

    /// Implementation of [`Executor`] for Tokio.
    ///
    /// A `TokioExecutor` either borrows a runtime through its [`Handle`] or owns a multi-threaded
    /// runtime. An owned runtime is shut down in the background once the last clone is dropped.
    #[derive(Clone)]
    pub struct TokioExecutor {
        handle: Handle,
        _owned: Option<Arc<OwnedRuntime>>,
    }

    impl fmt::Debug for TokioExecutor {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("TokioExecutor")
                .field("flavor", &self.handle.runtime_flavor())
                .field("owned", &self._owned.is_some())
                .finish()
        }
    }

    struct OwnedRuntime(Mutex<Option<Runtime>>);

    impl Drop for OwnedRuntime {
        fn drop(&mut self) {
            let runtime = match self.0.get_mut() {
                Ok(runtime) => runtime.take(),
                Err(poisoned) => poisoned.into_inner().take(),
            };
            if let Some(runtime) = runtime {
                // dropping a runtime from an async context panics
                runtime.shutdown_background();
            }
        }
    }

    impl TokioExecutor {
        /// Create an executor that owns a new multi-threaded runtime
        pub fn new() -> io::Result<Self> {
            Self::with_worker_threads(None::<usize>)
        }

        /// Create an executor that owns a new multi-threaded runtime with a fixed number of workers
        pub fn with_worker_threads(worker_threads: impl Into<Option<usize>>) -> io::Result<Self> {
            let mut builder = Builder::new_multi_thread();
            builder.enable_all().thread_name("smithy-executor");
            if let Some(threads) = worker_threads.into() {
                builder.worker_threads(threads.max(1));
            }
            let runtime = builder.build()?;
            let handle = runtime.handle().clone();
            tracing::debug!("started executor runtime");
            Ok(TokioExecutor {
                handle,
                _owned: Some(Arc::new(OwnedRuntime(Mutex::new(Some(runtime))))),
            })
        }

        /// Create an executor that borrows an existing runtime
        pub fn from_handle(handle: Handle) -> Self {
            TokioExecutor {
                handle,
                _owned: None,
            }
        }

        /// The current runtime, if this is called from a multi-threaded Tokio runtime
        pub fn ambient() -> Option<Self> {
            let handle = Handle::try_current().ok()?;
            match handle.runtime_flavor() {
                RuntimeFlavor::MultiThread => Some(Self::from_handle(handle)),
                _ => None,
            }
        }

        /// The handle of the runtime that tasks are spawned onto
        pub fn handle(&self) -> &Handle {
            &self.handle
        }
    }

    impl Executor for TokioExecutor {
        fn spawn(&self, task: Task<'static>) {
            drop(self.handle.spawn(task));
        }

        fn block_on(&self, task: Task<'_>) {
            let ambient = Handle::try_current().ok().map(|h| h.runtime_flavor());
            match ambient {
                None => self.block_on_here(task),
                Some(RuntimeFlavor::MultiThread) => {
                    tokio::task::block_in_place(|| self.block_on_here(task))
                }
                // a current-thread runtime must not be blocked; run on a helper thread instead
                Some(_) => std::thread::scope(|scope| {
                    let helper = scope.spawn(move || self.block_on_here(task));
                    if let Err(panic) = helper.join() {
                        std::panic::resume_unwind(panic);
                    }
                }),
            }
        }
    }

    impl TokioExecutor {
        /// Must not be called from within an async context
        fn block_on_here(&self, task: Task<'_>) {
            match self.handle.runtime_flavor() {
                RuntimeFlavor::MultiThread => self.handle.block_on(task),
                // A borrowed current-thread handle cannot drive IO or timers on its own
                _ => Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("a current thread runtime can always be constructed")
                    .block_on(task),
            }
        }
    }

    static SHARED_POOL: OnceCell<TokioExecutor> = OnceCell::new();

    pub(super) fn shared_pool() -> Option<TokioExecutor> {
        match SHARED_POOL.get_or_try_init(TokioExecutor::new) {
            Ok(executor) => Some(executor.clone()),
            Err(err) => {
                tracing::warn!(error = %err, "failed to start the shared executor runtime");
                None
            }
        }
    }
}

#[cfg(all(test, feature = "rt-tokio"))]
mod test {
    use super::{default_executor, Executor, SharedExecutor, TokioExecutor};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::oneshot;

    fn run_to_completion(executor: &dyn Executor) -> usize {
        let mut result = 0;
        let slot = &mut result;
        executor.block_on(Box::pin(async move {
            tokio::task::yield_now().await;
            *slot = 42;
        }));
        result
    }

    #[test]
    fn block_on_outside_runtime() {
        let executor = TokioExecutor::new().expect("runtime starts");
        assert_eq!(run_to_completion(&executor), 42);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn block_on_inside_multi_thread_runtime() {
        let executor = default_executor().expect("tokio enabled");
        assert_eq!(run_to_completion(&executor), 42);
    }

    #[tokio::test]
    async fn block_on_inside_current_thread_runtime() {
        let executor = TokioExecutor::from_handle(tokio::runtime::Handle::current());
        assert_eq!(run_to_completion(&executor), 42);
    }

    #[tokio::test]
    async fn spawn_runs_in_background() {
        let executor = SharedExecutor::new(TokioExecutor::new().expect("runtime starts"));
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();
        let task_counter = counter.clone();
        executor.spawn(Box::pin(async move {
            task_counter.fetch_add(1, Ordering::SeqCst);
            let _ = tx.send(());
        }));
        rx.await.expect("task ran");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn owned_runtime_drops_cleanly() {
        let executor = TokioExecutor::with_worker_threads(1).expect("runtime starts");
        let clone = executor.clone();
        drop(executor);
        assert_eq!(run_to_completion(&clone), 42);
    }
}

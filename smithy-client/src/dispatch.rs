/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Alternate ways to drive a request future.
//!
//! Every generated operation is natively `async`. The helpers in this module adapt that future for
//! callers that want to block the current thread, receive a handle to poll later, or be notified
//! through a callback. All three run on an [`Executor`](smithy_async::rt::executor::Executor).

use pin_project_lite::pin_project;
use smithy_async::rt::executor::{Executor, SharedExecutor};
use smithy_http::result::SdkError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Run `future` to completion on the current thread.
///
/// This is safe to call from within a Tokio runtime: the executor takes care of moving the work
/// out of the async context where needed.
pub fn block_on<F>(executor: &dyn Executor, future: F) -> F::Output
where
    F: Future + Send,
    F::Output: Send,
{
    let mut output = None;
    let slot = &mut output;
    executor.block_on(Box::pin(async move {
        *slot = Some(future.await);
    }));
    output.expect("executor ran the task to completion")
}

/// Submit `future` to `executor` and return a handle to its eventual outcome.
pub fn spawn<F, T, E>(executor: &SharedExecutor, future: F) -> OperationFuture<T, E>
where
    F: Future<Output = Result<T, SdkError<E>>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    executor.spawn(Box::pin(async move {
        let result = future.await;
        if tx.send(result).is_err() {
            tracing::trace!("operation future was dropped before the request completed");
        }
    }));
    OperationFuture {
        receiver: rx,
        executor: Some(executor.clone()),
    }
}

/// Submit `future` to `executor` and invoke `callback` with its outcome.
///
/// `callback` is invoked exactly once. If the task is dropped before the request completes (for
/// example because the runtime shut down), the callback receives a
/// [`DispatchFailure`](SdkError::DispatchFailure).
pub fn spawn_with_callback<F, T, E, C>(executor: &SharedExecutor, future: F, callback: C)
where
    F: Future<Output = Result<T, SdkError<E>>> + Send + 'static,
    C: FnOnce(Result<T, SdkError<E>>) + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let mut guard = CallbackGuard {
        callback: Some(callback),
        _result: std::marker::PhantomData,
    };
    executor.spawn(Box::pin(async move {
        let result = future.await;
        guard.complete(result);
    }));
}

struct CallbackGuard<C, T, E>
where
    C: FnOnce(Result<T, SdkError<E>>),
{
    callback: Option<C>,
    _result: std::marker::PhantomData<fn(T, E)>,
}

impl<C, T, E> CallbackGuard<C, T, E>
where
    C: FnOnce(Result<T, SdkError<E>>),
{
    fn complete(&mut self, result: Result<T, SdkError<E>>) {
        if let Some(callback) = self.callback.take() {
            callback(result)
        }
    }
}

impl<C, T, E> Drop for CallbackGuard<C, T, E>
where
    C: FnOnce(Result<T, SdkError<E>>),
{
    fn drop(&mut self) {
        self.complete(Err(dropped_task()));
    }
}

pin_project! {
    /// The eventual outcome of a request submitted with [`spawn`].
    ///
    /// `OperationFuture` can be awaited, or [`wait`](OperationFuture::wait)ed on from synchronous
    /// code. Dropping it does not cancel the request.
    pub struct OperationFuture<T, E> {
        #[pin]
        receiver: oneshot::Receiver<Result<T, SdkError<E>>>,
        executor: Option<SharedExecutor>,
    }
}

impl<T, E> fmt::Debug for OperationFuture<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFuture")
            .field("executor", &self.executor)
            .finish()
    }
}

impl<T, E> OperationFuture<T, E>
where
    T: Send,
    E: Send,
{
    /// Block the current thread until the request completes.
    pub fn wait(self) -> Result<T, SdkError<E>> {
        match self.executor.clone() {
            Some(executor) => block_on(&executor, self),
            // only `ready` futures have no executor and their outcome is already sent
            None => {
                let OperationFuture { mut receiver, .. } = self;
                receiver.try_recv().unwrap_or_else(|_| Err(dropped_task()))
            }
        }
    }
}

impl<T, E> OperationFuture<T, E> {
    /// An `OperationFuture` that has already completed with `result`
    pub fn ready(result: Result<T, SdkError<E>>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        OperationFuture {
            receiver: rx,
            executor: None,
        }
    }
}

fn dropped_task<E>() -> SdkError<E> {
    SdkError::DispatchFailure("the request task was dropped before it completed".into())
}

/// No [`Executor`] is available to run a request
///
/// Returned as a construction failure by the blocking, callable and callback dispatch modes when
/// the client was configured without an executor and no default could be started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoExecutor;

impl fmt::Display for NoExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no executor is configured. Set one on the client config or enable the `rt-tokio` feature of smithy-async"
        )
    }
}

impl std::error::Error for NoExecutor {}

impl<T, E> Future for OperationFuture<T, E> {
    type Output = Result<T, SdkError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().receiver.poll(cx).map(|result| match result {
            Ok(outcome) => outcome,
            Err(_) => Err(dropped_task()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{block_on, spawn, spawn_with_callback, NoExecutor, OperationFuture};
    use smithy_async::rt::executor::{default_executor, SharedExecutor, TokioExecutor};
    use smithy_http::result::SdkError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    struct TestError;

    fn executor() -> SharedExecutor {
        SharedExecutor::new(TokioExecutor::new().expect("runtime starts"))
    }

    #[test]
    fn block_on_returns_output() {
        let executor = executor();
        let out = block_on(&executor, async { 5 });
        assert_eq!(out, 5);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn block_on_from_async_context() {
        let executor = default_executor().expect("tokio is enabled");
        let out = block_on(&executor, async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            "done"
        });
        assert_eq!(out, "done");
    }

    #[tokio::test]
    async fn spawned_future_can_be_awaited() {
        let executor = executor();
        let fut = spawn(&executor, async { Ok::<_, SdkError<TestError>>(7) });
        assert_eq!(fut.await.expect("success"), 7);
    }

    #[test]
    fn spawned_future_can_be_waited_on() {
        let executor = executor();
        let fut = spawn(&executor, async { Ok::<_, SdkError<TestError>>("value") });
        assert_eq!(fut.wait().expect("success"), "value");
    }

    #[test]
    fn callback_fires_once() {
        let executor = executor();
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel();
        let counter = calls.clone();
        spawn_with_callback(
            &executor,
            async { Err::<(), _>(SdkError::ConstructionFailure("bad input".into())) },
            move |result: Result<(), SdkError<TestError>>| {
                counter.fetch_add(1, Ordering::SeqCst);
                tx.send(result.is_err()).unwrap();
            },
        );
        assert!(rx.recv_timeout(Duration::from_secs(5)).expect("callback ran"));
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ready_future_does_not_need_an_executor() {
        let fut = OperationFuture::<(), TestError>::ready(Err(SdkError::ConstructionFailure(
            NoExecutor.into(),
        )));
        match fut.wait() {
            Err(SdkError::ConstructionFailure(err)) => assert!(err.is::<NoExecutor>()),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn ready_future_can_be_awaited() {
        let fut = OperationFuture::<_, TestError>::ready(Ok("cached"));
        assert_eq!(fut.await.expect("success"), "cached");
    }

    #[test]
    fn panicked_task_reports_dispatch_failure() {
        let executor = executor();
        let fut = spawn(&executor, async {
            if true {
                panic!("request task panicked");
            }
            Ok::<(), SdkError<TestError>>(())
        });
        assert!(matches!(fut.wait(), Err(SdkError::DispatchFailure(_))));
    }

    #[test]
    fn callback_fires_when_runtime_shuts_down() {
        let executor = SharedExecutor::new(
            TokioExecutor::with_worker_threads(1).expect("runtime starts"),
        );
        let (tx, rx) = mpsc::channel();
        spawn_with_callback(
            &executor,
            std::future::pending::<Result<(), SdkError<TestError>>>(),
            move |result| tx.send(result).unwrap(),
        );
        drop(executor);
        let outcome = rx.recv_timeout(Duration::from_secs(5)).expect("callback ran");
        assert!(matches!(outcome, Err(SdkError::DispatchFailure(_))));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry support
//!
//! Components:
//! - [`Standard`]: Top level manager, intended to be associated with a [`Client`](crate::Client).
//!   Its sole purpose in life is to create a [`RetryHandler`] for individual requests.
//! - [`RetryHandler`]: A request-scoped retry policy, backed by request-local state and shared
//!   state contained within [`Standard`].
//! - [`Config`]: Static configuration (max attempts, max backoff etc.)

use smithy_async::rt::sleep::{AsyncSleep, SharedAsyncSleep};
use smithy_http::operation::Operation;
use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, RetryConfig, RetryKind};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::Instrument;

/// A policy instantiator.
///
/// Implementors are essentially "policy factories" that can produce a new instance of a retry
/// policy mechanism for each request, which allows both shared global state _and_ per-request
/// local state.
pub trait NewRequestPolicy {
    /// The type of the per-request policy mechanism.
    type Policy;

    /// Create a new policy mechanism instance.
    fn new_request_policy(&self, sleep_impl: Option<SharedAsyncSleep>) -> Self::Policy;
}

/// Retry Policy Configuration
///
/// Without specific use cases, users should generally rely on the default values set by
/// [`Config::default`](Config::default).
#[derive(Clone, Debug)]
pub struct Config {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl Config {
    /// Override `b` in the exponential backoff computation
    ///
    /// By default, `base` is a randomly generated value between 0 and 1. In tests, it can
    /// be helpful to override this:
    /// ```rust
    /// use smithy_client::retry::Config;
    /// let conf = Config::default().with_base(||1_f64);
    /// ```
    pub fn with_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    /// Override the maximum number of attempts
    ///
    /// `max_attempts` must be set to a value of at least `1` (indicating that retries are disabled).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Override the size of the shared retry token bucket
    pub fn with_initial_retry_tokens(mut self, initial_retry_tokens: usize) -> Self {
        self.initial_retry_tokens = initial_retry_tokens;
        self
    }

    /// Override the upper bound of a single backoff
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// A configuration that never retries
    pub fn disabled() -> Self {
        Self::default().with_max_attempts(1)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: 10,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: Duration::from_secs(20),
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

impl From<&RetryConfig> for Config {
    fn from(retry_config: &RetryConfig) -> Self {
        Config::default().with_max_attempts(retry_config.max_attempts())
    }
}

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;

/// Manage retries for a service
///
/// An implementation of the `standard` AWS retry strategy. A `Standard` is scoped to a client and
/// owns the retry quota shared by every request that client sends.
/// For an individual request, call [`Standard::new_request_policy()`](Standard::new_request_policy)
#[derive(Debug, Clone)]
pub struct Standard {
    config: Config,
    shared_state: CrossRequestRetryState,
}

impl Standard {
    /// Construct a new standard retry policy from the given policy configuration.
    pub fn new(config: Config) -> Self {
        Self {
            shared_state: CrossRequestRetryState::new(config.initial_retry_tokens),
            config,
        }
    }

    /// Set the configuration for this retry policy.
    pub fn with_config(&mut self, config: Config) -> &mut Self {
        self.shared_state = CrossRequestRetryState::new(config.initial_retry_tokens);
        self.config = config;
        self
    }

    /// Tokens remaining in the shared retry quota
    pub fn available_quota(&self) -> usize {
        self.shared_state.available()
    }
}

impl NewRequestPolicy for Standard {
    type Policy = RetryHandler;

    fn new_request_policy(&self, sleep_impl: Option<SharedAsyncSleep>) -> Self::Policy {
        RetryHandler {
            local: RequestLocalRetryState::new(),
            shared: self.shared_state.clone(),
            config: self.config.clone(),
            sleep_impl,
        }
    }
}

impl Default for Standard {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[derive(Clone, Debug)]
struct RequestLocalRetryState {
    attempts: u32,
    last_quota_usage: Option<usize>,
}

impl RequestLocalRetryState {
    fn new() -> Self {
        Self {
            // the initial request counts as the first attempt
            attempts: 1,
            last_quota_usage: None,
        }
    }
}

/// Shared state between multiple requests to the same client.
#[derive(Clone, Debug)]
struct CrossRequestRetryState {
    quota_available: Arc<Mutex<usize>>,
}

#[allow(clippy::mutex_atomic)]
impl CrossRequestRetryState {
    fn new(initial_quota: usize) -> Self {
        Self {
            quota_available: Arc::new(Mutex::new(initial_quota)),
        }
    }

    fn available(&self) -> usize {
        *self.quota_available.lock().unwrap()
    }

    fn quota_release(&self, value: Option<usize>, config: &Config) {
        let mut quota = self.quota_available.lock().unwrap();
        *quota = (*quota + value.unwrap_or(config.no_retry_increment)).min(config.initial_retry_tokens);
    }

    /// Attempt to acquire retry quota for `ErrorKind`
    ///
    /// If quota is available, the amount of quota consumed is returned
    /// If no quota is available, `None` is returned.
    fn quota_acquire(&self, err: &ErrorKind, config: &Config) -> Option<usize> {
        let mut quota = self.quota_available.lock().unwrap();
        let retry_cost = if err == &ErrorKind::TransientError {
            config.timeout_retry_cost
        } else {
            config.retry_cost
        };
        if retry_cost > *quota {
            None
        } else {
            *quota -= retry_cost;
            Some(retry_cost)
        }
    }
}

/// RetryHandler
///
/// Implement retries for an individual request.
/// It is intended to be used as a [Tower Retry Policy](tower::retry::Policy) for use in tower-based
/// middleware stacks.
#[derive(Clone, Debug)]
pub struct RetryHandler {
    local: RequestLocalRetryState,
    shared: CrossRequestRetryState,
    config: Config,
    sleep_impl: Option<SharedAsyncSleep>,
}

impl RetryHandler {
    /// Determine the correct response given `retry_kind`
    ///
    /// If a retry is specified, this function returns `(next, backoff_duration)`
    /// If no retry is specified, this function returns None
    fn attempt_retry(&self, retry_kind: Result<(), ErrorKind>) -> Option<(Self, Duration)> {
        let quota_used = match retry_kind {
            Ok(_) => {
                self.shared
                    .quota_release(self.local.last_quota_usage, &self.config);
                return None;
            }
            Err(e) => {
                if self.local.attempts == self.config.max_attempts {
                    tracing::trace!(attempts = self.local.attempts, "not retrying because we are out of attempts");
                    return None;
                }
                match self.shared.quota_acquire(&e, &self.config) {
                    Some(quota) => quota,
                    None => {
                        tracing::trace!(state = ?self.shared, "not retrying because no quota is available");
                        return None;
                    }
                }
            }
        };
        let backoff = self.backoff(self.local.attempts);
        let next = RetryHandler {
            local: RequestLocalRetryState {
                attempts: self.local.attempts + 1,
                last_quota_usage: Some(quota_used),
            },
            shared: self.shared.clone(),
            config: self.config.clone(),
            sleep_impl: self.sleep_impl.clone(),
        };

        Some((next, backoff))
    }

    fn backoff(&self, attempts: u32) -> Duration {
        let b = (self.config.base)();
        let r: i32 = 2;
        // `self.local.attempts` tracks number of requests made including the initial request
        // The initial attempt shouldn't count towards backoff calculations so we subtract it
        let backoff = b * (r.pow(attempts - 1) as f64);
        Duration::from_secs_f64(backoff).min(self.config.max_backoff)
    }

    fn should_retry(&self, retry_kind: &RetryKind) -> Option<(Self, Duration)> {
        match retry_kind {
            RetryKind::Explicit(dur) => {
                if self.local.attempts == self.config.max_attempts {
                    return None;
                }
                let mut next = self.clone();
                next.local.attempts += 1;
                Some((next, *dur))
            }
            RetryKind::NotRetryable => None,
            RetryKind::Unnecessary => {
                self.shared
                    .quota_release(self.local.last_quota_usage, &self.config);
                None
            }
            RetryKind::Error(err) => self.attempt_retry(Err(*err)),
            _ => None,
        }
    }

    fn retry_for(&self, retry_kind: RetryKind) -> Option<Pin<Box<dyn Future<Output = Self> + Send>>> {
        // quota is only taken once a retry can actually be scheduled
        let sleep = match &self.sleep_impl {
            Some(sleep) => sleep.clone(),
            None => {
                if retry_kind != RetryKind::Unnecessary {
                    tracing::debug!("cannot retry because no sleep implementation exists");
                }
                return None;
            }
        };
        let (next, dur) = self.should_retry(&retry_kind)?;

        tracing::debug!(
            "attempt {}: retrying after {:?} because {:?}",
            self.local.attempts,
            dur,
            retry_kind
        );
        let fut = async move {
            sleep.sleep(dur).await;
            next
        }
        .instrument(tracing::debug_span!("retry", kind = ?retry_kind));
        Some(Box::pin(fut))
    }
}

impl<Handler, R, T, E>
    tower::retry::Policy<Operation<Handler, R>, SdkSuccess<T>, SdkError<E>> for RetryHandler
where
    Handler: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
{
    type Future = Pin<Box<dyn Future<Output = Self> + Send>>;

    fn retry(
        &self,
        req: &Operation<Handler, R>,
        result: Result<&SdkSuccess<T>, &SdkError<E>>,
    ) -> Option<Self::Future> {
        let policy = req.retry_policy();
        let retry_kind = policy.classify(result);
        self.retry_for(retry_kind)
    }

    fn clone_request(&self, req: &Operation<Handler, R>) -> Option<Operation<Handler, R>> {
        req.try_clone()
    }
}

#[cfg(test)]
mod test {
    use crate::retry::{Config, NewRequestPolicy, RetryHandler, Standard};
    use smithy_async::rt::sleep::{SharedAsyncSleep, TokioSleep};
    use smithy_types::retry::{ErrorKind, RetryKind};
    use std::time::Duration;
    use tracing_test::traced_test;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn retry_handler_send_sync() {
        assert_send_sync::<RetryHandler>()
    }

    fn test_config() -> Config {
        Config::default().with_base(|| 1_f64)
    }

    #[test]
    fn eventual_success() {
        let policy = Standard::new(test_config()).new_request_policy(None);
        let (policy, dur) = policy
            .attempt_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(policy.retry_quota(), 495);

        let (policy, dur) = policy
            .attempt_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(policy.retry_quota(), 490);

        let no_retry = policy.attempt_retry(Ok(()));
        assert!(no_retry.is_none());
        assert_eq!(policy.retry_quota(), 495);
    }

    #[test]
    fn no_more_attempts() {
        let policy = Standard::new(test_config()).new_request_policy(None);
        let (policy, dur) = policy
            .attempt_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(policy.retry_quota(), 495);

        let (policy, dur) = policy
            .attempt_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(policy.retry_quota(), 490);

        let no_retry = policy.attempt_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(policy.retry_quota(), 490);
    }

    #[test]
    fn no_quota() {
        let conf = test_config().with_initial_retry_tokens(5);
        let policy = Standard::new(conf).new_request_policy(None);
        let (policy, dur) = policy
            .attempt_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(policy.retry_quota(), 0);
        let no_retry = policy.attempt_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(policy.retry_quota(), 0);
    }

    #[test]
    fn transient_errors_cost_more() {
        let policy = Standard::new(test_config()).new_request_policy(None);
        let (policy, _) = policy
            .attempt_retry(Err(ErrorKind::TransientError))
            .expect("should retry");
        assert_eq!(policy.retry_quota(), 490);
        assert!(policy.attempt_retry(Ok(())).is_none());
        assert_eq!(policy.retry_quota(), 500);
    }

    #[test]
    fn backoff_timing() {
        let conf = test_config().with_max_attempts(5);
        let policy = Standard::new(conf).new_request_policy(None);
        let mut expected = vec![1, 2, 4, 8].into_iter();
        let mut policy = policy;
        let mut quota = 500;
        while let Some((next, dur)) = policy.attempt_retry(Err(ErrorKind::ServerError)) {
            quota -= 5;
            assert_eq!(dur, Duration::from_secs(expected.next().expect("too many retries")));
            assert_eq!(next.retry_quota(), quota);
            policy = next;
        }
        assert!(expected.next().is_none());
        assert_eq!(policy.retry_quota(), 480);
    }

    #[test]
    fn max_backoff_time() {
        let conf = test_config()
            .with_max_attempts(5)
            .with_max_backoff(Duration::from_secs(3));
        let mut policy = Standard::new(conf).new_request_policy(None);
        let mut durations = vec![];
        while let Some((next, dur)) = policy.attempt_retry(Err(ErrorKind::ServerError)) {
            durations.push(dur.as_secs());
            policy = next;
        }
        assert_eq!(durations, vec![1, 2, 3, 3]);
        assert_eq!(policy.retry_quota(), 480);
    }

    #[test]
    #[traced_test]
    fn no_sleep_impl_leaves_quota_untouched() {
        let policy = Standard::new(test_config()).new_request_policy(None);
        for _ in 0..10 {
            assert!(policy
                .retry_for(RetryKind::Error(ErrorKind::ServerError))
                .is_none());
        }
        assert_eq!(policy.retry_quota(), 500);
        assert!(logs_contain("no sleep implementation"));
    }

    #[tokio::test(start_paused = true)]
    #[traced_test]
    async fn scheduled_retry_takes_quota() {
        let policy = Standard::new(test_config()).new_request_policy(Some(SharedAsyncSleep::new(
            TokioSleep::new(),
        )));
        let next = policy
            .retry_for(RetryKind::Error(ErrorKind::ThrottlingError))
            .expect("retry is scheduled");
        assert_eq!(policy.retry_quota(), 495);
        let next = next.await;
        assert_eq!(next.local.attempts, 2);
        assert!(logs_contain("attempt 1: retrying after"));
    }

    #[test]
    fn disabled_config_never_retries() {
        let policy = Standard::new(Config::disabled()).new_request_policy(None);
        assert!(policy.attempt_retry(Err(ErrorKind::ThrottlingError)).is_none());
        assert_eq!(policy.retry_quota(), 500);
    }

    impl RetryHandler {
        fn retry_quota(&self) -> usize {
            self.shared.available()
        }
    }
}

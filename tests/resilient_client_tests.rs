#![cfg(all(feature = "async", feature = "validation"))]
//! End-to-end scenario: a user lookup client assembled from the combinators.
//!
//! The transport is a scripted fake. Each request pops the next reply, which
//! either returns a body, fails with an I/O error or never answers.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use railway::config::{CircuitBreakerConfig, ResilienceConfig, RetryPolicy};
use railway::control::{Either, OptionExt, safe_parse_int};
use railway::error::{AppError, log_error};
use railway::task::{CircuitBreaker, CircuitState, TaskEither, parallel, with_retry, with_timeout};
use railway::validation::Validator;
use rstest::{fixture, rstest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy)]
enum Reply {
    Body(&'static str),
    Fail(&'static str),
    Hang,
}

#[derive(Debug, Default)]
struct FakeTransport {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
}

impl FakeTransport {
    fn scripted(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: AtomicUsize::new(0),
        })
    }

    async fn get(self: Arc<Self>, _path: String) -> std::io::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().pop_front();
        match reply {
            Some(Reply::Body(body)) => Ok(body.to_string()),
            Some(Reply::Fail(message)) => Err(std::io::Error::other(message)),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(std::io::Error::other("script exhausted")),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    id: i64,
    email: String,
}

/// Parses `"<id>,<email>"` and validates the email.
fn parse_user(body: &str) -> Either<AppError, User> {
    let email_rule = Validator::<String>::new("email").non_empty().email();

    body.split_once(',')
        .to_either(AppError::validation("body", "expected `<id>,<email>`"))
        .flat_map(|(id, email)| {
            safe_parse_int(id, 10)
                .to_either(AppError::validation("id", "not a number"))
                .map(|id| (id, email.trim().to_string()))
        })
        .flat_map(|(id, email)| {
            email_rule
                .validate(email)
                .map_left(|mut errors| AppError::from(errors.remove(0)))
                .map(|email| User { id, email })
        })
}

fn fetch_user(transport: Arc<FakeTransport>, id: u64, config: ResilienceConfig) -> TaskEither<AppError, User> {
    let request = move || {
        let call = Arc::clone(&transport).get(format!("/users/{id}"));
        let attempt = TaskEither::from_future(call, |error| AppError::network(error.to_string()));
        with_timeout(attempt, config.timeout)
    };

    with_retry(request, config.retry, AppError::is_retryable)
        .flat_map(|body| TaskEither::from_either(parse_user(&body)))
        .inspect_left(log_error)
}

#[fixture]
fn config() -> ResilienceConfig {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("railway=debug"))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();

    ResilienceConfig {
        retry: RetryPolicy::new(2, Duration::from_millis(100), 2.0),
        breaker: CircuitBreakerConfig::new(2, Duration::from_secs(30)),
        timeout: Duration::from_secs(1),
    }
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_transient_failures_are_retried(config: ResilienceConfig) {
    let transport = FakeTransport::scripted([Reply::Fail("connection reset"), Reply::Hang, Reply::Body("7, ada@example.com")]);

    let user = fetch_user(Arc::clone(&transport), 7, config).run().await;

    assert_eq!(
        user,
        Either::Right(User {
            id: 7,
            email: "ada@example.com".to_string()
        })
    );
    assert_eq!(transport.calls(), 3);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_invalid_payload_is_not_retried(config: ResilienceConfig) {
    let transport = FakeTransport::scripted([Reply::Body("7,not-an-email")]);

    let user = fetch_user(Arc::clone(&transport), 7, config).run().await;

    assert_eq!(user, Either::Left(AppError::validation("email", "Invalid email address")));
    assert_eq!(transport.calls(), 1);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_exhausted_retries_surface_last_error(config: ResilienceConfig) {
    let transport = FakeTransport::scripted([Reply::Fail("a"), Reply::Fail("b"), Reply::Fail("c"), Reply::Body("1,x@y.io")]);

    let user = fetch_user(Arc::clone(&transport), 1, config).run().await;

    assert_eq!(user, Either::Left(AppError::network("c")));
    assert_eq!(transport.calls(), 3);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_breaker_stops_hammering_a_dead_service(config: ResilienceConfig) {
    let transport = FakeTransport::scripted([]);
    let breaker = {
        let transport = Arc::clone(&transport);
        CircuitBreaker::new(move || fetch_user(Arc::clone(&transport), 1, config), config.breaker)
    };

    for _ in 0..2 {
        let outcome = breaker.execute().run().await;
        assert_eq!(outcome, Either::Left(AppError::network("script exhausted")));
    }
    assert_eq!(breaker.state(), CircuitState::Open);
    let calls_when_opened = transport.calls();
    assert_eq!(calls_when_opened, 6);

    let rejected = breaker.execute().run().await;
    assert_eq!(rejected.left().map(|error| error.code()), Some("CIRCUIT_OPEN"));
    assert_eq!(transport.calls(), calls_when_opened);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_parallel_lookups_report_every_failure(config: ResilienceConfig) {
    let transport = FakeTransport::scripted([
        Reply::Body("1,a@example.com"),
        Reply::Body("2,broken"),
        Reply::Body("3,c@example.com"),
    ]);

    let lookups = (1..=3).map(|id| fetch_user(Arc::clone(&transport), id, config));
    let outcome = parallel(lookups).run().await;

    let errors = outcome.left().unwrap_or_default();
    assert_eq!(errors, vec![AppError::validation("email", "Invalid email address")]);
}

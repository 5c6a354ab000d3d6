#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! End-to-end tests of the HTTP surface against a real listener on an
//! ephemeral port, with the counter store swapped for in-process doubles.

use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use hitcount_core::{CounterStore, HitCountError, InMemoryCounterStore, Result};
use hitcount_server::{app_state::AppState, router};

/// Store double that can be switched into a failing state, standing in for a
/// Redis outage.
struct FlakyStore {
    inner: InMemoryCounterStore,
    down: AtomicBool,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: InMemoryCounterStore::new(),
            down: AtomicBool::new(false),
        }
    }

    fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }
}

#[async_trait]
impl CounterStore for FlakyStore {
    async fn increment(&self, key: &str) -> Result<u64> {
        if self.down.load(Ordering::SeqCst) {
            return Err(HitCountError::StoreUnavailable(
                "connection refused".into(),
            ));
        }
        self.inner.increment(key).await
    }
}

async fn spawn_app(store: Arc<dyn CounterStore>) -> SocketAddr {
    let state = AppState::new(store);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Issue one `GET {path}` and return (status, headers, body).
async fn get(addr: SocketAddr, path: &str) -> (u16, String, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8(raw).unwrap();

    let (head, body) = text.split_once("\r\n\r\n").unwrap();
    let status: u16 = head
        .lines()
        .next()
        .unwrap()
        .split_whitespace()
        .nth(1)
        .unwrap()
        .parse()
        .unwrap();
    (status, head.to_ascii_lowercase(), body.to_string())
}

fn parse_count(body: &str) -> u64 {
    body.chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap()
}

#[tokio::test]
async fn first_request_returns_one_as_plain_text() {
    let addr = spawn_app(Arc::new(InMemoryCounterStore::new())).await;

    let (status, headers, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    assert!(headers.contains("content-type: text/plain"));
    assert_eq!(body, "Hello! This page has been viewed 1 times.");
}

#[tokio::test]
async fn counts_are_monotonic_by_one() {
    let addr = spawn_app(Arc::new(InMemoryCounterStore::new())).await;

    let mut last = 0;
    for _ in 0..3 {
        let (status, _, body) = get(addr, "/").await;
        assert_eq!(status, 200);
        let n = parse_count(&body);
        assert_eq!(n, last + 1);
        last = n;
    }
    assert_eq!(last, 3);
}

#[tokio::test]
async fn third_response_body_is_exact() {
    let addr = spawn_app(Arc::new(InMemoryCounterStore::new())).await;

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let (_, _, body) = get(addr, "/").await;
        bodies.push(body);
    }
    assert_eq!(bodies[2], "Hello! This page has been viewed 3 times.");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_see_distinct_sequential_counts() {
    const K: u64 = 32;

    let addr = spawn_app(Arc::new(InMemoryCounterStore::new())).await;

    let mut tasks = Vec::new();
    for _ in 0..K {
        tasks.push(tokio::spawn(async move {
            let (status, _, body) = get(addr, "/").await;
            assert_eq!(status, 200);
            parse_count(&body)
        }));
    }

    let mut seen = BTreeSet::new();
    for task in tasks {
        seen.insert(task.await.unwrap());
    }

    let expected: BTreeSet<u64> = (1..=K).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn store_outage_fails_one_request_and_recovers_without_reset() {
    let store = Arc::new(FlakyStore::new());
    let addr = spawn_app(store.clone()).await;

    for expected in 1..=2u64 {
        let (status, _, body) = get(addr, "/").await;
        assert_eq!(status, 200);
        assert_eq!(parse_count(&body), expected);
    }

    store.set_down(true);
    let (status, _, body) = get(addr, "/").await;
    assert_eq!(status, 503);
    assert!(body.contains("STORE_UNAVAILABLE"));

    // Process keeps serving; counter picks up where it left off.
    store.set_down(false);
    let (status, _, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    assert_eq!(parse_count(&body), 3);
}

#[tokio::test]
async fn healthz_is_alive_even_when_store_is_down() {
    let store = Arc::new(FlakyStore::new());
    store.set_down(true);
    let addr = spawn_app(store).await;

    let (status, _, body) = get(addr, "/healthz").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

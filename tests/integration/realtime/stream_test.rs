//! Collaboration stream integration tests
//!
//! These run the router on a real socket and read the SSE body with
//! reqwest, since the stream never completes on its own.

use axum::body::Bytes;
use futures_util::{Stream, StreamExt};
use serde_json::json;
use tokio::time::{timeout, Duration};
use translation_hub::shared::CollabEvent;

use crate::common::{memory_state, spawn_http_server, wait_until};

/// Read from `body` until one complete SSE event has arrived, returning its data
async fn next_event<S>(body: &mut S, buffer: &mut String) -> String
where
    S: Stream<Item = reqwest::Result<Bytes>> + Unpin,
{
    loop {
        if let Some(end) = buffer.find("\n\n") {
            let frame: String = buffer.drain(..end + 2).collect();
            let data: Vec<&str> = frame
                .lines()
                .filter_map(|line| line.strip_prefix("data:"))
                .map(|data| data.strip_prefix(' ').unwrap_or(data))
                .collect();
            // Keep-alive comments carry no data line
            if data.is_empty() {
                continue;
            }
            return data.join("\n");
        }

        let chunk = body
            .next()
            .await
            .expect("Stream ended before an event arrived")
            .expect("Failed to read stream chunk");
        buffer.push_str(&String::from_utf8_lossy(&chunk));
    }
}

#[tokio::test]
async fn test_stream_delivers_published_events_in_order() {
    let app_state = memory_state();
    let broadcaster = app_state.broadcaster.clone();
    let addr = spawn_http_server(app_state).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/collab/stream", addr))
        .send()
        .await
        .expect("Failed to open stream");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    crate::assert_contains!(content_type, "text/event-stream");

    assert!(wait_until(Duration::from_secs(2), || broadcaster.subscriber_count() == 1).await);

    for content in ["first", "second"] {
        client
            .post(format!("http://{}/api/collab/publish", addr))
            .json(&json!({ "chapter_id": "c1", "user": "alice", "content": content }))
            .send()
            .await
            .expect("Failed to publish")
            .error_for_status()
            .expect("Publish was rejected");
    }

    let mut body = Box::pin(response.bytes_stream());
    let mut buffer = String::new();
    let first = timeout(Duration::from_secs(2), next_event(&mut body, &mut buffer))
        .await
        .expect("Timed out waiting for first event");
    let second = timeout(Duration::from_secs(2), next_event(&mut body, &mut buffer))
        .await
        .expect("Timed out waiting for second event");

    assert_eq!(
        first,
        r#"{"chapter_id":"c1","user":"alice","content":"first"}"#
    );
    let second: CollabEvent = serde_json::from_str(&second).expect("Event should be JSON");
    assert_eq!(second, CollabEvent::new("c1", "alice", "second"));
}

#[tokio::test]
async fn test_every_stream_receives_each_event() {
    let app_state = memory_state();
    let broadcaster = app_state.broadcaster.clone();
    let addr = spawn_http_server(app_state).await;
    let client = reqwest::Client::new();

    let url = format!("http://{}/api/collab/stream", addr);
    let first = client.get(&url).send().await.expect("Failed to open stream");
    let second = client.get(&url).send().await.expect("Failed to open stream");
    assert!(wait_until(Duration::from_secs(2), || broadcaster.subscriber_count() == 2).await);

    let delivered = broadcaster
        .publish(&CollabEvent::new("c7", "bob", "shared"))
        .expect("Event should serialize");
    assert_eq!(delivered, 2);

    for response in [first, second] {
        let mut body = Box::pin(response.bytes_stream());
        let mut buffer = String::new();
        let data = timeout(Duration::from_secs(2), next_event(&mut body, &mut buffer))
            .await
            .expect("Timed out waiting for event");
        let event: CollabEvent = serde_json::from_str(&data).expect("Event should be JSON");
        assert_eq!(event.content, "shared");
    }
}

#[tokio::test]
async fn test_disconnected_stream_is_unsubscribed() {
    let app_state = memory_state();
    let broadcaster = app_state.broadcaster.clone();
    let addr = spawn_http_server(app_state).await;

    let response = reqwest::get(format!("http://{}/api/collab/stream", addr))
        .await
        .expect("Failed to open stream");
    assert!(wait_until(Duration::from_secs(2), || broadcaster.subscriber_count() == 1).await);

    drop(response);

    // Writes to the closed socket surface the disconnect to the server
    let event = CollabEvent::new("c1", "alice", "anyone there?");
    let gone = wait_until(Duration::from_secs(5), || {
        let _ = broadcaster.publish(&event);
        broadcaster.subscriber_count() == 0
    })
    .await;
    assert!(gone, "stream was not unsubscribed after disconnect");
}

#[tokio::test]
async fn test_close_ends_open_streams() {
    let app_state = memory_state();
    let broadcaster = app_state.broadcaster.clone();
    let addr = spawn_http_server(app_state).await;

    let response = reqwest::get(format!("http://{}/api/collab/stream", addr))
        .await
        .expect("Failed to open stream");
    assert!(wait_until(Duration::from_secs(2), || broadcaster.subscriber_count() == 1).await);

    broadcaster.close();

    let mut body = Box::pin(response.bytes_stream());
    let ended = timeout(Duration::from_secs(2), async {
        while let Some(chunk) = body.next().await {
            if chunk.is_err() {
                break;
            }
        }
    })
    .await;
    assert!(ended.is_ok(), "stream stayed open after close");
    assert_eq!(broadcaster.subscriber_count(), 0);
}

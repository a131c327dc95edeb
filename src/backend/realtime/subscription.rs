/**
 * Collaboration Stream Handler
 *
 * Implements `GET /api/collab/stream`: a Server-Sent Events stream that
 * carries every collaboration event published while the connection is open.
 *
 * # Wire Format
 *
 * Each event is a single `data:` line holding the event JSON followed by a
 * blank line:
 *
 * ```text
 * data: {"chapter_id":"...","user":"alice","content":"..."}
 *
 * ```
 *
 * Keep-alive comments (`:`) are interleaved at the configured interval.
 *
 * # Connection Management
 *
 * The stream owns the `Subscription`. When the client disconnects, hyper
 * drops the response body, the stream and with it the subscription, which
 * unsubscribes. When the broadcaster is closed at shutdown the subscription
 * yields `None` and the stream ends.
 */

use crate::backend::realtime::broadcast::CollabBroadcaster;
use crate::shared::AppConfig;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use std::convert::Infallible;
use std::sync::Arc;

/// Handle a collaboration stream request (GET /api/collab/stream)
pub async fn handle_collab_stream(
    State(broadcaster): State<CollabBroadcaster>,
    State(config): State<Arc<AppConfig>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let subscription = broadcaster.subscribe();
    tracing::info!("[Collab] Stream {} opened", subscription.id());

    let stream = stream::unfold(subscription, |mut subscription| async move {
        match subscription.recv().await {
            Some(message) => {
                tracing::debug!("[Collab] Forwarding event to stream {}", subscription.id());
                Some((Ok(Event::default().data(message)), subscription))
            }
            None => {
                tracing::info!("[Collab] Stream {} closed by server", subscription.id());
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(config.keep_alive))
}

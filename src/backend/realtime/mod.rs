//! Real-time Collaboration Module
//!
//! Publish/subscribe fan-out of collaboration events over Server-Sent
//! Events.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - CollabBroadcaster and Subscription
//! ├── subscription.rs - GET /api/collab/stream
//! └── publish.rs      - POST /api/collab/publish
//! ```
//!
//! # Flow
//!
//! 1. A client opens `/api/collab/stream`; the handler subscribes and keeps
//!    the subscription inside the response stream
//! 2. An editor posts an event to `/api/collab/publish`
//! 3. The broadcaster queues the serialized event on every open channel
//! 4. Each stream forwards it as a `data:` event
//!
//! Events are not stored. A client that connects late, or reconnects,
//! only sees events published after it subscribed.

/// Subscriber set and fan-out
pub mod broadcast;

/// Server-Sent Events stream handler
pub mod subscription;

/// Publish handler
pub mod publish;

// Re-export commonly used types and functions
pub use broadcast::{CollabBroadcaster, Subscription};
pub use subscription::handle_collab_stream;
pub use publish::handle_collab_publish;

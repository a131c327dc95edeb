/**
 * Collaboration Events
 *
 * Events published by one editor and pushed to every open collaboration
 * stream. They are never stored; an event exists only while it is being
 * fanned out.
 */
use serde::{Deserialize, Serialize};

/// A single collaboration event
///
/// Serialized field order is `chapter_id`, `user`, `content`, which is the
/// exact payload carried in each `data:` line of the push stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollabEvent {
    /// Chapter the event refers to
    pub chapter_id: String,
    /// Display name of the editor
    pub user: String,
    /// Arbitrary payload
    pub content: String,
}

impl CollabEvent {
    pub fn new(
        chapter_id: impl Into<String>,
        user: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            user: user.into(),
            content: content.into(),
        }
    }
}

/// Acknowledgement returned by mutating endpoints (`{"status":"ok"}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

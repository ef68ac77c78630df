//! Parked replies awaiting a web-content message.
//!
//! `openWebView` with a non-empty `jsMessage` defers its reply until the
//! embedded page posts on that channel. There is no timeout: a channel that
//! never fires leaves its caller pending indefinitely, and closing the
//! window does not cancel the reply.

use std::collections::HashMap;

use tracing::warn;

use crate::protocol::Responder;

/// Pending replies keyed by message channel name.
#[derive(Default)]
pub struct PendingReplies {
    replies: HashMap<String, Responder>,
}

impl PendingReplies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a responder under `channel`. If the channel is already taken the
    /// earlier responder is dropped unfulfilled — two live web views sharing
    /// a channel name is a caller bug.
    pub fn park(&mut self, channel: impl Into<String>, responder: Responder) {
        let channel = channel.into();
        if self.replies.insert(channel.clone(), responder).is_some() {
            warn!(channel = %channel, "message channel re-registered; earlier reply abandoned");
        }
    }

    /// Take the responder parked under `channel`, if any.
    pub fn take(&mut self, channel: &str) -> Option<Responder> {
        self.replies.remove(channel)
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.replies.contains_key(channel)
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

//! Content kinds attachable to a window.

use serde::{Deserialize, Serialize};

/// What a window hosts. One parameterized creation path serves both kinds;
/// the plain/web split never forks the registry logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    /// A surface hosting the framework's own rendered UI.
    Plain,
    /// An embedded web view.
    Web {
        /// URL loaded into the web engine.
        url: String,
        /// Name of the outbound message channel the page may post on.
        /// Empty means no channel is registered.
        js_message: String,
    },
}

impl ContentKind {
    /// Create a web content kind.
    pub fn web(url: impl Into<String>, js_message: impl Into<String>) -> Self {
        Self::Web {
            url: url.into(),
            js_message: js_message.into(),
        }
    }

    /// The message channel name, if this is web content with a non-empty one.
    pub fn message_channel(&self) -> Option<&str> {
        match self {
            Self::Web { js_message, .. } if !js_message.is_empty() => Some(js_message),
            _ => None,
        }
    }
}

//! Wire types for the command protocol.
//!
//! Commands arrive as a method name plus a JSON argument bundle; every call
//! is answered through a [`Responder`], including failures. Field names
//! match the scripting bridge exactly (`jsMessage`, `offsetX`, ...) for
//! drop-in compatibility.

use serde::{Deserialize, Serialize};
use tracing::debug;
use winbridge_common::WindowStats;

/// Argument bundle common to every command. All fields optional; each
/// command validates what it needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandArgs {
    pub key: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "jsMessage")]
    pub js_message: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl CommandArgs {
    /// Parse an argument bundle from raw JSON.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Successful command payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Bool(bool),
    Int(i64),
    Text(String),
    Stats(WindowStats),
    /// Arbitrary payload forwarded from embedded web content.
    Payload(serde_json::Value),
    /// Absent value (e.g. `lastWindowKey` on an empty registry).
    Null,
}

/// Everything a command can resolve to. Failures travel through the same
/// structured channel as successes; nothing crosses the protocol boundary
/// as a panic or exception.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Reply),
    /// Key has no matching registry entry.
    NotFound { key: String },
    /// Unknown command name.
    NotImplemented,
    /// Malformed argument bundle or a toolkit failure. The original bridge
    /// had no defined behavior here (it crashed on missing arguments); the
    /// rewrite reports it like any other result.
    Failed { message: String },
}

/// One-shot completion for a command.
///
/// Most commands respond before returning; `openWebView` with a non-empty
/// message channel parks its responder until the page posts. Fulfillment is
/// at most once by construction — `respond` consumes the responder.
pub struct Responder {
    complete: Option<Box<dyn FnOnce(Outcome)>>,
}

impl Responder {
    pub fn new(complete: impl FnOnce(Outcome) + 'static) -> Self {
        Self {
            complete: Some(Box::new(complete)),
        }
    }

    /// Deliver the outcome to the caller.
    pub fn respond(mut self, outcome: Outcome) {
        if let Some(complete) = self.complete.take() {
            complete(outcome);
        }
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        if self.complete.is_some() {
            // A parked web reply whose channel never fired, or whose channel
            // was re-registered by a later window. The caller stays pending.
            debug!("responder dropped without a reply");
        }
    }
}

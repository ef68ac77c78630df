//! Window lifecycle events.
//!
//! The service pushes events into a shared sink; the host event loop drains
//! them once per turn. Nothing blocks on the sink.

use std::sync::{Arc, Mutex};

/// Events emitted by the window service.
#[derive(Debug, Clone)]
pub enum WindowEvent {
    /// A window was created and shown.
    Created { key: String },
    /// A window's origin changed via the protocol.
    Moved { key: String, x: f64, y: f64 },
    /// A window's content size changed via the protocol.
    Resized {
        key: String,
        width: f64,
        height: f64,
    },
    /// A window was destroyed and removed from the registry.
    Closed { key: String },
    /// Embedded web content posted a message on a named channel.
    WebMessage {
        channel: String,
        payload: serde_json::Value,
    },
}

/// Shared event sink drained by the host event loop.
#[derive(Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<WindowEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: WindowEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<WindowEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

//! The window registry service.
//!
//! Owns the registry, the toolkit seam, and the parked web replies, and
//! performs every protocol operation. Constructed with its toolkit injected;
//! there is no global instance.

use tracing::{debug, warn};

use winbridge_common::{Rect, RegistryError, Result, WindowStats};

use crate::config::WindowDefaults;
use crate::content::ContentKind;
use crate::events::{EventSink, WindowEvent};
use crate::pending::PendingReplies;
use crate::protocol::{Outcome, Reply, Responder};
use crate::registry::{WindowEntry, WindowRegistry};
use crate::toolkit::WindowToolkit;

/// Geometry requested by a create call. Omitted fields resolve through
/// [`WindowDefaults`] against the primary display's usable area.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRequest {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

pub struct WindowService<T: WindowToolkit> {
    toolkit: T,
    registry: WindowRegistry,
    pending: PendingReplies,
    events: EventSink,
    defaults: WindowDefaults,
    /// How many windows have been created with a defaulted origin, for the
    /// optional cascade offset.
    defaulted_origins: usize,
}

impl<T: WindowToolkit> WindowService<T> {
    pub fn new(toolkit: T) -> Self {
        Self::with_defaults(toolkit, WindowDefaults::default())
    }

    pub fn with_defaults(toolkit: T, defaults: WindowDefaults) -> Self {
        Self {
            toolkit,
            registry: WindowRegistry::new(),
            pending: PendingReplies::new(),
            events: EventSink::new(),
            defaults,
            defaulted_origins: 0,
        }
    }

    /// Shared handle to the event sink, for the host event loop.
    pub fn event_sink(&self) -> EventSink {
        self.events.clone()
    }

    /// Drain all pending window events.
    pub fn drain_events(&self) -> Vec<WindowEvent> {
        self.events.drain()
    }

    /// Create a plain window and show it. Duplicate keys are appended, not
    /// rejected; lookups keep resolving to the first match.
    pub fn create_window(&mut self, key: &str, request: FrameRequest) -> Result<()> {
        self.open(key, ContentKind::Plain, request)
    }

    /// Create a web window and show it.
    ///
    /// With an empty `js_message` the responder fires immediately with the
    /// confirmation string `"{key} created"`. With a non-empty channel name
    /// the responder is parked until the page posts on that channel — there
    /// is no timeout, and closing the window does not cancel the reply.
    pub fn create_web_window(
        &mut self,
        key: &str,
        url: &str,
        js_message: &str,
        request: FrameRequest,
        responder: Responder,
    ) {
        let content = ContentKind::web(url, js_message);
        if let Err(err) = self.open(key, content.clone(), request) {
            warn!(key = %key, error = %err, "web window creation failed");
            responder.respond(Outcome::Failed {
                message: err.to_string(),
            });
            return;
        }
        match content.message_channel() {
            None => responder.respond(Outcome::Success(Reply::Text(format!("{key} created")))),
            Some(channel) => {
                debug!(key = %key, channel = %channel, "reply parked until web content posts");
                self.pending.park(channel, responder);
            }
        }
    }

    /// Close the first window registered under `key`. Always reports success,
    /// even when no such window exists — close is idempotent by protocol
    /// contract. A parked web reply for the closed window stays pending.
    pub fn close_window(&mut self, key: &str) -> bool {
        match self.registry.remove(key) {
            Some(mut entry) => {
                entry.surface.will_disappear();
                entry.window.close();
                entry.surface.did_disappear();
                debug!(key = %key, remaining = self.registry.count(), "window closed");
                self.events.push(WindowEvent::Closed { key: key.into() });
            }
            None => debug!(key = %key, "close for unknown key ignored"),
        }
        true
    }

    pub fn window_count(&self) -> usize {
        self.registry.count()
    }

    /// Position of the first match in insertion order. A missing key reports
    /// 0, indistinguishable from "found at position 0" — preserved from the
    /// original wire contract.
    pub fn key_index(&self, key: &str) -> usize {
        self.registry.position(key).unwrap_or(0)
    }

    /// Key of the most recently created still-open window.
    pub fn last_window_key(&self) -> Option<String> {
        self.registry.last_key().map(str::to_string)
    }

    /// Live frame of the window under `key`, read back from the toolkit.
    pub fn window_stats(&self, key: &str) -> Result<WindowStats> {
        let entry = self
            .registry
            .find(key)
            .ok_or_else(|| RegistryError::NotFound(key.into()))?;
        Ok(entry.window.frame().into())
    }

    /// Reposition the window under `key`.
    pub fn move_window(&mut self, key: &str, x: f64, y: f64) -> Result<()> {
        let entry = self
            .registry
            .find_mut(key)
            .ok_or_else(|| RegistryError::NotFound(key.into()))?;
        entry.window.set_origin(x, y);
        self.events.push(WindowEvent::Moved {
            key: key.into(),
            x,
            y,
        });
        Ok(())
    }

    /// Resize the window under `key`'s content area.
    pub fn resize_window(&mut self, key: &str, width: f64, height: f64) -> Result<()> {
        let entry = self
            .registry
            .find_mut(key)
            .ok_or_else(|| RegistryError::NotFound(key.into()))?;
        entry.window.set_content_size(width, height);
        self.events.push(WindowEvent::Resized {
            key: key.into(),
            width,
            height,
        });
        Ok(())
    }

    /// Forward a message posted by embedded web content. Called by the host
    /// event loop on the turn the message arrives. Fulfills the reply parked
    /// under `channel`, if any; otherwise the message is logged and dropped.
    pub fn deliver_web_message(&mut self, channel: &str, payload: serde_json::Value) {
        self.events.push(WindowEvent::WebMessage {
            channel: channel.into(),
            payload: payload.clone(),
        });
        match self.pending.take(channel) {
            Some(responder) => {
                debug!(channel = %channel, "web message fulfills parked reply");
                responder.respond(Outcome::Success(Reply::Payload(payload)));
            }
            None => debug!(channel = %channel, "web message with no parked reply dropped"),
        }
    }

    /// How many web replies are still parked.
    pub fn pending_reply_count(&self) -> usize {
        self.pending.len()
    }

    fn open(&mut self, key: &str, content: ContentKind, request: FrameRequest) -> Result<()> {
        let frame = self.resolve_frame(request)?;
        let created = self.toolkit.create_window(key, frame, &content)?;
        let mut entry = WindowEntry::new(key, content, created.window, created.surface);
        entry.window.show();
        self.registry.insert(entry);
        debug!(key = %key, ?frame, "window created");
        self.events.push(WindowEvent::Created { key: key.into() });
        Ok(())
    }

    fn resolve_frame(&mut self, request: FrameRequest) -> Result<Rect> {
        let area = self.toolkit.usable_area()?;
        let width = request
            .width
            .unwrap_or(area.width * self.defaults.size_fraction);
        let height = request
            .height
            .unwrap_or(area.height * self.defaults.size_fraction);
        let (mut x, mut y) = area.centered_origin(width, height);
        if request.x.is_none() && request.y.is_none() {
            let shift = self.defaults.cascade_offset * self.defaulted_origins as f64;
            x += shift;
            y += shift;
            self.defaulted_origins += 1;
        }
        if let Some(rx) = request.x {
            x = rx;
        }
        if let Some(ry) = request.y {
            y = ry;
        }
        Ok(Rect::new(x, y, width, height))
    }
}

//! Keyed multi-window registry and its command protocol.
//!
//! `WindowService` owns the set of open top-level windows, one per
//! caller-chosen string key, and serves a small command set (create, move,
//! resize, close, enumerate, open a web view) on behalf of a scripting
//! bridge. The host windowing toolkit, the content surface, and the embedded
//! web engine are consumed through traits — nothing here links a concrete
//! backend.
//!
//! All operations run on the host UI thread; the one asynchronous contract
//! is the deferred reply of `openWebView` with a non-empty message channel.

pub mod config;
pub mod content;
pub mod dispatch;
pub mod events;
pub mod pending;
pub mod protocol;
pub mod registry;
pub mod service;
pub mod toolkit;

#[cfg(test)]
pub(crate) mod testing;

pub use config::WindowDefaults;
pub use content::ContentKind;
pub use dispatch::CommandDispatcher;
pub use events::{EventSink, WindowEvent};
pub use protocol::{CommandArgs, Outcome, Reply, Responder};
pub use service::{FrameRequest, WindowService};
pub use toolkit::{ContentSurface, CreatedWindow, ToolkitWindow, WindowToolkit};

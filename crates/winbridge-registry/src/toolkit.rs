//! Trait seams to the host windowing system.
//!
//! The registry never talks to a concrete toolkit. The embedding application
//! implements these traits over whatever it renders with and injects the
//! toolkit when constructing the service. Native window objects are
//! thread-affine; every method here is called on the host UI thread.

use winbridge_common::{Rect, ToolkitError};

use crate::content::ContentKind;

/// An open top-level window, exclusively owned by its registry entry.
/// Dropping or closing the handle destroys the native window; the entry
/// must not be referenced afterward.
pub trait ToolkitWindow {
    /// Current frame, read live from the toolkit. The registry never caches
    /// geometry — this is the authoritative value.
    fn frame(&self) -> Rect;

    /// Reposition the window's origin.
    fn set_origin(&mut self, x: f64, y: f64);

    /// Resize the window's content area.
    fn set_content_size(&mut self, width: f64, height: f64);

    /// Make the window visible and bring it on screen.
    fn show(&mut self);

    /// Destroy the native window.
    fn close(&mut self);
}

/// The view hosting rendered content inside a window. Receives lifecycle
/// notifications bracketing toolkit teardown so attached resources (e.g. an
/// embedded web engine) can suspend before the native handle is freed.
pub trait ContentSurface {
    /// Called just before the native window is destroyed.
    fn will_disappear(&mut self) {}

    /// Called just after the native window is destroyed.
    fn did_disappear(&mut self) {}
}

/// Window plus its attached content surface, as built by the toolkit.
pub struct CreatedWindow {
    pub window: Box<dyn ToolkitWindow>,
    pub surface: Box<dyn ContentSurface>,
}

/// Factory seam to the host windowing toolkit.
pub trait WindowToolkit {
    /// Usable area of the primary display (excluding menu bars, docks,
    /// taskbars). Default geometry is resolved against this.
    fn usable_area(&self) -> Result<Rect, ToolkitError>;

    /// Create a top-level window at `frame` with a fresh content surface for
    /// `content`. For `ContentKind::Web` the toolkit loads the URL and, when
    /// the channel name is non-empty, wires the engine's outbound channel so
    /// posted messages reach the host event loop (which forwards them to
    /// [`crate::WindowService::deliver_web_message`]).
    ///
    /// The window is created hidden; the service shows it after registering.
    fn create_window(
        &mut self,
        key: &str,
        frame: Rect,
        content: &ContentKind,
    ) -> Result<CreatedWindow, ToolkitError>;
}

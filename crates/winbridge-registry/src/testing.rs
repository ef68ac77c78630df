//! In-memory toolkit double for unit tests.
//!
//! Records every toolkit interaction into a shared log so tests can assert
//! ordering (e.g. the will_disappear/close/did_disappear bracket).

use std::cell::RefCell;
use std::rc::Rc;

use winbridge_common::{Rect, ToolkitError};

use crate::content::ContentKind;
use crate::protocol::{Outcome, Responder};
use crate::toolkit::{ContentSurface, CreatedWindow, ToolkitWindow, WindowToolkit};

pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

pub(crate) struct FakeWindow {
    frame: Rect,
    key: String,
    log: Option<CallLog>,
}

impl FakeWindow {
    pub(crate) fn new(frame: Rect) -> Self {
        Self {
            frame,
            key: String::new(),
            log: None,
        }
    }

    fn logged(key: &str, frame: Rect, log: CallLog) -> Self {
        Self {
            frame,
            key: key.to_string(),
            log: Some(log),
        }
    }

    fn record(&self, call: &str) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("{}:{}", call, self.key));
        }
    }
}

impl ToolkitWindow for FakeWindow {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_origin(&mut self, x: f64, y: f64) {
        self.frame.x = x;
        self.frame.y = y;
        self.record("set_origin");
    }

    fn set_content_size(&mut self, width: f64, height: f64) {
        self.frame.width = width;
        self.frame.height = height;
        self.record("set_content_size");
    }

    fn show(&mut self) {
        self.record("show");
    }

    fn close(&mut self) {
        self.record("close");
    }
}

pub(crate) struct FakeSurface {
    key: String,
    log: Option<CallLog>,
}

impl FakeSurface {
    /// A surface with no log, for tests that only need a placeholder.
    pub(crate) fn detached(key: &str) -> Self {
        Self {
            key: key.to_string(),
            log: None,
        }
    }

    fn record(&self, call: &str) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("{}:{}", call, self.key));
        }
    }
}

impl ContentSurface for FakeSurface {
    fn will_disappear(&mut self) {
        self.record("will_disappear");
    }

    fn did_disappear(&mut self) {
        self.record("did_disappear");
    }
}

pub(crate) struct FakeToolkit {
    pub(crate) area: Rect,
    pub(crate) fail_create: bool,
    log: CallLog,
}

impl FakeToolkit {
    pub(crate) fn new() -> Self {
        Self {
            area: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            fail_create: false,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn with_area(area: Rect) -> Self {
        Self {
            area,
            ..Self::new()
        }
    }

    pub(crate) fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }
}

impl WindowToolkit for FakeToolkit {
    fn usable_area(&self) -> Result<Rect, ToolkitError> {
        Ok(self.area)
    }

    fn create_window(
        &mut self,
        key: &str,
        frame: Rect,
        content: &ContentKind,
    ) -> Result<CreatedWindow, ToolkitError> {
        if self.fail_create {
            return Err(ToolkitError::CreateFailed("fake toolkit refused".into()));
        }
        let kind = match content {
            ContentKind::Plain => "plain",
            ContentKind::Web { .. } => "web",
        };
        self.log
            .borrow_mut()
            .push(format!("create[{}]:{}", kind, key));
        Ok(CreatedWindow {
            window: Box::new(FakeWindow::logged(key, frame, Rc::clone(&self.log))),
            surface: Box::new(FakeSurface {
                key: key.to_string(),
                log: Some(Rc::clone(&self.log)),
            }),
        })
    }
}

/// Responder that captures its outcome into a shared slot.
pub(crate) fn capture() -> (Responder, Rc<RefCell<Option<Outcome>>>) {
    let slot = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&slot);
    (
        Responder::new(move |outcome| *sink.borrow_mut() = Some(outcome)),
        slot,
    )
}

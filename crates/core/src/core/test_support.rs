//! In-memory doubles for page elements and host services.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::HostError;
use crate::sink::{DiagnosticLog, TextDisplay};
use crate::surface::{
    ContextLostHandler, DrawingSurface, Notifier, SurfaceLossEvent, CONTEXT_LOST_EVENT,
};

#[derive(Clone, Default)]
pub(crate) struct MemoryDisplay {
    content: Rc<RefCell<String>>,
    scrolls: Rc<Cell<usize>>,
}

impl MemoryDisplay {
    pub(crate) fn with_content(text: &str) -> Self {
        let d = Self::default();
        d.content.borrow_mut().push_str(text);
        d
    }

    pub(crate) fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub(crate) fn scrolls(&self) -> usize {
        self.scrolls.get()
    }
}

impl TextDisplay for MemoryDisplay {
    fn clear(&self) {
        self.content.borrow_mut().clear();
    }

    fn append(&self, text: &str) {
        self.content.borrow_mut().push_str(text);
    }

    fn scroll_to_bottom(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingLog {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl DiagnosticLog for RecordingLog {
    fn log(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub(crate) struct FakeEvent {
    prevented: Cell<bool>,
}

impl FakeEvent {
    pub(crate) fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl SurfaceLossEvent for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

#[derive(Default)]
struct SurfaceState {
    handlers: RefCell<Vec<ContextLostHandler>>,
    reject: bool,
}

#[derive(Clone, Default)]
pub(crate) struct FakeSurface {
    state: Rc<SurfaceState>,
}

impl FakeSurface {
    pub(crate) fn rejecting_listeners() -> Self {
        Self {
            state: Rc::new(SurfaceState {
                handlers: RefCell::new(Vec::new()),
                reject: true,
            }),
        }
    }

    pub(crate) fn same_element(&self, other: &FakeSurface) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.state.handlers.borrow().len()
    }

    /// Dispatch one context-loss event to every registered listener.
    pub(crate) fn lose_context(&self) -> FakeEvent {
        let event = FakeEvent::default();
        for handler in self.state.handlers.borrow_mut().iter_mut() {
            handler(&event);
        }
        event
    }
}

impl DrawingSurface for FakeSurface {
    fn on_context_lost(&self, handler: ContextLostHandler) -> Result<(), HostError> {
        if self.state.reject {
            return Err(HostError::Listener {
                event: CONTEXT_LOST_EVENT.to_string(),
                reason: "listener rejected".to_string(),
            });
        }
        self.state.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

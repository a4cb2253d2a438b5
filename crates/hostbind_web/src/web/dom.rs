//! `web_sys` implementations of the host binding seams.

use hostbind::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// The page's text output element.
///
/// Form controls are written through `value`, anything else through `textContent`.
pub enum OutputElement {
    TextArea(web_sys::HtmlTextAreaElement),
    Input(web_sys::HtmlInputElement),
    Generic(web_sys::Element),
}

impl OutputElement {
    pub fn from_element(el: web_sys::Element) -> Self {
        let el = match el.dyn_into::<web_sys::HtmlTextAreaElement>() {
            Ok(t) => return Self::TextArea(t),
            Err(el) => el,
        };
        match el.dyn_into::<web_sys::HtmlInputElement>() {
            Ok(i) => Self::Input(i),
            Err(el) => Self::Generic(el),
        }
    }

    fn element(&self) -> &web_sys::Element {
        match self {
            Self::TextArea(t) => t.as_ref(),
            Self::Input(i) => i.as_ref(),
            Self::Generic(e) => e,
        }
    }
}

impl TextDisplay for OutputElement {
    fn clear(&self) {
        match self {
            Self::TextArea(t) => t.set_value(""),
            Self::Input(i) => i.set_value(""),
            Self::Generic(e) => e.set_text_content(Some("")),
        }
    }

    fn append(&self, text: &str) {
        match self {
            Self::TextArea(t) => {
                let mut v = t.value();
                v.push_str(text);
                t.set_value(&v);
            }
            Self::Input(i) => {
                let mut v = i.value();
                v.push_str(text);
                i.set_value(&v);
            }
            Self::Generic(e) => {
                let mut v = e.text_content().unwrap_or_default();
                v.push_str(text);
                e.set_text_content(Some(&v));
            }
        }
    }

    fn scroll_to_bottom(&self) {
        let el = self.element();
        el.set_scroll_top(el.scroll_height());
    }
}

/// The page's drawing-surface element, usually a `<canvas>`.
///
/// Any element is accepted and handed back as-is; it only has to accept event listeners.
/// Clones share the element.
#[derive(Clone)]
pub struct CanvasSurface(web_sys::Element);

impl CanvasSurface {
    pub fn new(el: web_sys::Element) -> Self {
        Self(el)
    }

    pub fn element(&self) -> &web_sys::Element {
        &self.0
    }
}

struct DomEvent<'a>(&'a web_sys::Event);

impl SurfaceLossEvent for DomEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

impl DrawingSurface for CanvasSurface {
    fn on_context_lost(&self, mut handler: ContextLostHandler) -> Result<(), HostError> {
        let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            handler(&DomEvent(&ev));
        }) as Box<dyn FnMut(_)>);

        self.0
            .add_event_listener_with_callback_and_bool(
                CONTEXT_LOST_EVENT,
                cb.as_ref().unchecked_ref(),
                false,
            )
            .map_err(|e| HostError::Listener {
                event: CONTEXT_LOST_EVENT.to_string(),
                reason: js_error_text(&e),
            })?;

        // Listener lives as long as the page.
        cb.forget();
        Ok(())
    }
}

/// Mirrors printed lines to the browser console.
pub struct ConsoleLog;

impl DiagnosticLog for ConsoleLog {
    fn log(&self, line: &str) {
        web_sys::console::log_1(&JsValue::from_str(line));
    }
}

/// Blocking `window.alert`.
pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn alert(&self, message: &str) {
        let shown = match web_sys::window() {
            Some(w) => w.alert_with_message(message).map_err(|e| js_error_text(&e)),
            None => Err("no window".to_string()),
        };
        if let Err(reason) = shown {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "alert not shown ({reason}): {message}"
            )));
        }
    }
}

fn js_error_text(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

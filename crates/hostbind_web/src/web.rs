use std::rc::Rc;

use hostbind::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod dom;

use dom::{CanvasSurface, ConsoleLog, OutputElement, WindowAlert};

/// Look up the configured elements once and bind them.
pub fn bind_page(settings: &HostSettings) -> Result<HostConfig<CanvasSurface>, HostError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(HostError::NoDocument)?;

    let output = document
        .get_element_by_id(&settings.output_id)
        .map(|el| Rc::new(OutputElement::from_element(el)) as Rc<dyn TextDisplay>);

    let canvas = document
        .get_element_by_id(&settings.canvas_id)
        .map(CanvasSurface::new);

    let services = HostServices {
        log: Rc::new(ConsoleLog),
        notifier: Rc::new(WindowAlert),
    };
    Ok(HostConfig::build(output, canvas, &services, settings))
}

/// Build the loader configuration `{ print?, canvas? }` from the default element ids.
#[wasm_bindgen(js_name = createHostConfig)]
pub fn create_host_config() -> Result<js_sys::Object, JsValue> {
    export(&HostSettings::default())
}

/// Same as `createHostConfig`, with settings given as a JSON object string.
#[wasm_bindgen(js_name = createHostConfigWith)]
pub fn create_host_config_with(settings_json: &str) -> Result<js_sys::Object, JsValue> {
    let settings = HostSettings::from_json(settings_json).map_err(to_js_error)?;
    export(&settings)
}

fn export(settings: &HostSettings) -> Result<js_sys::Object, JsValue> {
    let cfg = bind_page(settings).map_err(to_js_error)?;
    let (print, canvas) = cfg.into_parts();

    // Unset capabilities stay absent from the object, not set to undefined.
    let obj = js_sys::Object::new();
    if let Some(sink) = print {
        js_sys::Reflect::set(&obj, &JsValue::from_str("print"), &variadic_print(sink)?)?;
    }
    if let Some(canvas) = canvas {
        let handle = JsValue::from(canvas.element().clone());
        js_sys::Reflect::set(&obj, &JsValue::from_str("canvas"), &handle)?;
    }
    Ok(obj)
}

/// Wraps `sink` in a JS function taking any number of arguments.
fn variadic_print(sink: PrintSink) -> Result<js_sys::Function, JsValue> {
    let cb = Closure::wrap(Box::new(move |args: js_sys::Array| {
        let line: String = args.join(sink.separator()).into();
        sink.print_line(&line);
    }) as Box<dyn FnMut(js_sys::Array)>);

    let wrap = js_sys::Function::new_with_args(
        "sink",
        "return function () { sink(Array.prototype.slice.call(arguments)); };",
    );
    let f = wrap
        .call1(&JsValue::NULL, cb.as_ref())?
        .dyn_into::<js_sys::Function>()?;

    // The loader keeps `print` for the page lifetime.
    cb.forget();
    Ok(f)
}

fn to_js_error(e: HostError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

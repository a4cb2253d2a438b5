//! The configuration value handed to the module loader.

use std::rc::Rc;

use crate::settings::HostSettings;
use crate::sink::{DiagnosticLog, PrintSink, TextDisplay};
use crate::surface::{arm_context_lost, DrawingSurface, Notifier};

/// Host-side services the bindings report through.
#[derive(Clone)]
pub struct HostServices {
    pub log: Rc<dyn DiagnosticLog>,
    pub notifier: Rc<dyn Notifier>,
}

/// Optional output sink and drawing surface, fixed at construction.
///
/// An unset capability means the page has no such element. It is never replaced
/// by a silent no-op.
pub struct HostConfig<C> {
    print: Option<PrintSink>,
    canvas: Option<C>,
}

/// Output capability: a sink over `output`, or `None` when the page has no output element.
///
/// Binding clears the element.
pub fn acquire_output_sink(
    output: Option<Rc<dyn TextDisplay>>,
    log: Rc<dyn DiagnosticLog>,
    separator: &str,
) -> Option<PrintSink> {
    let Some(display) = output else {
        tracing::debug!("no output element; print left unset");
        return None;
    };
    tracing::debug!("output element bound");
    Some(PrintSink::bind(display, log, separator))
}

/// Surface capability: `canvas` armed against context loss, or `None` when absent.
///
/// A surface that cannot be armed is treated as absent; the rest of the
/// configuration is unaffected.
pub fn acquire_surface<C: DrawingSurface>(
    canvas: Option<C>,
    notifier: Rc<dyn Notifier>,
    message: &str,
) -> Option<C> {
    let Some(surface) = canvas else {
        tracing::debug!("no canvas element; canvas left unset");
        return None;
    };
    if let Err(e) = arm_context_lost(&surface, notifier, message) {
        tracing::debug!(error = %e, "canvas not usable; canvas left unset");
        return None;
    }
    tracing::debug!("canvas bound");
    Some(surface)
}

impl<C: DrawingSurface> HostConfig<C> {
    pub fn build(
        output: Option<Rc<dyn TextDisplay>>,
        canvas: Option<C>,
        services: &HostServices,
        settings: &HostSettings,
    ) -> Self {
        let print = acquire_output_sink(output, services.log.clone(), &settings.separator);
        let canvas = acquire_surface(
            canvas,
            services.notifier.clone(),
            &settings.context_lost_message,
        );
        Self { print, canvas }
    }
}

impl<C> HostConfig<C> {
    pub fn print(&self) -> Option<&PrintSink> {
        self.print.as_ref()
    }

    /// The surface handle given at construction; never re-queried.
    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    pub fn has_print(&self) -> bool {
        self.print.is_some()
    }

    pub fn has_canvas(&self) -> bool {
        self.canvas.is_some()
    }

    pub fn into_parts(self) -> (Option<PrintSink>, Option<C>) {
        (self.print, self.canvas)
    }
}

//! # hostbind
//!
//! Host-environment bindings for a browser-embedded module: a text output sink
//! and a drawing surface that alerts the user when its graphics context is lost.
//!
//! Page elements are injected rather than looked up, so everything here runs and
//! tests on native targets. The `hostbind_web` crate supplies the DOM-backed
//! implementations of the traits below.
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use hostbind::prelude::*;
//!
//! struct Alert;
//! impl Notifier for Alert {
//!     fn alert(&self, message: &str) {
//!         eprintln!("{message}");
//!     }
//! }
//!
//! #[derive(Clone)]
//! struct NoCanvas;
//! impl DrawingSurface for NoCanvas {
//!     fn on_context_lost(&self, _handler: ContextLostHandler) -> Result<(), HostError> {
//!         Ok(())
//!     }
//! }
//!
//! let services = HostServices {
//!     log: Rc::new(TracingLog),
//!     notifier: Rc::new(Alert),
//! };
//! let cfg: HostConfig<NoCanvas> =
//!     HostConfig::build(None, None, &services, &HostSettings::default());
//! assert!(cfg.print().is_none());
//! ```
//!
//! ## Modules
//!
//! - [`sink`]: output sink and the display/log seams
//! - [`surface`]: drawing surface and context-loss handling
//! - [`config`]: the assembled configuration
//! - [`settings`]: element ids and messages

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/settings.rs"]
pub mod settings;

#[path = "core/sink.rs"]
pub mod sink;

#[path = "core/surface.rs"]
pub mod surface;

#[cfg(test)]
#[path = "core/test_support.rs"]
mod test_support;

pub mod prelude {
    pub use crate::config::{acquire_output_sink, acquire_surface, HostConfig, HostServices};
    pub use crate::error::HostError;
    pub use crate::settings::HostSettings;
    pub use crate::sink::{join_args, DiagnosticLog, PrintSink, TextDisplay, TracingLog};
    pub use crate::surface::{
        arm_context_lost, ContextLostHandler, DrawingSurface, Notifier, SurfaceLossEvent,
        CONTEXT_LOST_EVENT, DEFAULT_CONTEXT_LOST_MESSAGE,
    };
}

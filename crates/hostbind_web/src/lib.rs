//! DOM-backed implementations of the `hostbind` traits.
//!
//! Only `wasm32` builds with the `web` feature contain the real bindings
//! (`createHostConfig` and friends). Every other build compiles to an empty
//! shell so `cargo test` at the workspace root stays a native-only run.

/// Stands in for the DOM bindings on native builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::dom::{CanvasSurface, ConsoleLog, OutputElement, WindowAlert};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{bind_page, create_host_config, create_host_config_with};

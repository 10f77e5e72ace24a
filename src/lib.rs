//! Scrawl: drop annotation overlays onto any page.
//!
//! This crate is the browser half of the tool. It compiles to WebAssembly,
//! mounts the floating creation menu into the host page's body, and wires
//! pointer events into the pure interaction core in the [`overlay`] crate.
//! All state-machine and coordination logic lives there; this crate only
//! builds DOM nodes, forwards events, and applies the style descriptors the
//! core computes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Boot, shared state, effect application |
//! | [`dom`] | Element construction and style application helpers |

mod app;
mod dom;

use wasm_bindgen::prelude::*;

/// Entry point, invoked automatically when the payload is instantiated on
/// the host page.
///
/// # Errors
///
/// Fails if the host page has no usable document/body to mount into.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    app::boot()
}

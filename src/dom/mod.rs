//! DOM helpers shared by the menu and overlay element modules.
//!
//! All fallible browser calls propagate errors via `Result<_, JsValue>`; the
//! top-level callers in [`crate::app`] decide whether a failure is fatal
//! (boot) or logged and skipped (a single restyle).

pub mod menu_el;
pub mod overlay_el;
pub mod pointer;

use overlay::style::StyleDecl;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

/// The host page's document.
pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("host document unavailable"))
}

/// The host page's body, where overlays and the menu are mounted.
pub(crate) fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("host body unavailable"))
}

/// Create an element of the given tag.
pub(crate) fn create(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("created element is not an HtmlElement"))
}

/// Imperatively apply a style descriptor computed by the core.
pub(crate) fn apply(el: &HtmlElement, decl: &StyleDecl) -> Result<(), JsValue> {
    let style = el.style();
    for (prop, value) in decl {
        style.set_property(prop, value)?;
    }
    Ok(())
}

/// Attach a mouse-event listener to an element, parking the closure in
/// `closures` so it stays alive exactly as long as its element's owner.
pub(crate) fn listen(
    el: &HtmlElement,
    event: &str,
    closures: &mut Vec<Closure<dyn FnMut(MouseEvent)>>,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closures.push(closure);
    Ok(())
}

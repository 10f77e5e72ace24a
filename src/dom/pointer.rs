//! Pointer event mapping: browser `MouseEvent`s into core inputs.

use overlay::geom::Point;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MouseEvent, Node};

/// Client-space (viewport) position of a pointer event.
pub(crate) fn client_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Current window scroll offset; page coordinates are client + scroll.
pub(crate) fn scroll_offset() -> Result<Point, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("host window unavailable"))?;
    Ok(Point::new(window.scroll_x()?, window.scroll_y()?))
}

/// Whether the event landed exactly on `node` (and not on a descendant or
/// ancestor). Used for the text box's press-ignore guard.
pub(crate) fn targets_node(ev: &MouseEvent, node: &Node) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Node>().ok())
        .is_some_and(|t| t.is_same_node(Some(node)))
}

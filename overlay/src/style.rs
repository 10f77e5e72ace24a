//! Pure restyle computation.
//!
//! Every function here maps read-only state to a [`StyleDecl`] — an ordered
//! list of CSS property/value pairs — which the browser layer applies
//! imperatively. The state machine stays the single source of truth and the
//! restyle logic tests without a DOM.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::consts::{
    ACCENT_COLOR, FONT_FAMILY, MENU_BG_COLOR, MENU_HIDE_MS, MENU_TEXT_COLOR, Z_BASE,
    handle_gradient,
};
use crate::menu::Menu;
use crate::overlay::Overlay;
use crate::variant::VariantKind;

/// Ordered CSS property/value pairs.
pub type StyleDecl = Vec<(&'static str, String)>;

/// Format a pixel length.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Inner body extent: the container extent minus the variant's inset,
/// floored at zero so tiny overlays never produce negative lengths.
fn inner(extent: f64, inset: f64) -> f64 {
    (extent - inset).max(0.0)
}

// =============================================================
// Overlay container and body
// =============================================================

/// Container layout: page position, extent, layering, and the accent
/// outline that appears while the overlay is engaged.
#[must_use]
pub fn container(o: &Overlay) -> StyleDecl {
    let border = if o.state.engaged() {
        format!("1px solid {ACCENT_COLOR}")
    } else {
        "1px solid transparent".to_owned()
    };
    vec![
        ("position", "absolute".to_owned()),
        ("left", px(o.pos.x)),
        ("top", px(o.pos.y)),
        ("width", px(o.size.width)),
        ("height", px(o.size.height)),
        ("z-index", o.z_order().to_string()),
        ("cursor", "move".to_owned()),
        ("display", "flex".to_owned()),
        ("justify-content", "left".to_owned()),
        ("align-items", "normal".to_owned()),
        ("user-select", "none".to_owned()),
        ("border", border),
        ("transition", "border .2s ease-in-out".to_owned()),
        ("box-sizing", "border-box".to_owned()),
    ]
}

/// Variant body styling for the current size, color, and state.
#[must_use]
pub fn body(o: &Overlay) -> StyleDecl {
    match o.kind {
        VariantKind::Rect => bordered_body(o, 20.0, 9.0, None),
        VariantKind::RoundRect => bordered_body(o, 30.0, 15.0, Some("15px")),
        VariantKind::Circle => bordered_body(o, 4.0, 1.0, Some("50%")),
        VariantKind::Blur => blur_body(o),
        VariantKind::TextBox => text_body(o),
    }
}

/// Shared shape body: a border-only element inset inside the container.
fn bordered_body(o: &Overlay, inset: f64, margin: f64, radius: Option<&'static str>) -> StyleDecl {
    let mut decl = vec![
        ("box-sizing", "border-box".to_owned()),
        ("width", px(inner(o.size.width, inset))),
        ("height", px(inner(o.size.height, inset))),
        ("margin-top", px(margin)),
        ("margin-left", px(margin)),
        ("border", format!("4px solid {}", o.color)),
    ];
    if let Some(radius) = radius {
        decl.push(("border-radius", radius.to_owned()));
    }
    decl
}

/// Blur panel body: no border, just a backdrop filter over the host page.
fn blur_body(o: &Overlay) -> StyleDecl {
    vec![
        ("box-sizing", "border-box".to_owned()),
        ("width", px(inner(o.size.width, 4.0))),
        ("height", px(inner(o.size.height, 4.0))),
        ("margin-top", px(1.0)),
        ("margin-left", px(1.0)),
        ("background-color", "rgba(255, 255, 255, 0)".to_owned()),
        ("backdrop-filter", "blur(10px)".to_owned()),
        ("-webkit-backdrop-filter", "blur(10px)".to_owned()),
    ]
}

/// Text region body: colored bold text with a white halo so it stays
/// readable over any page, and a dashed outline while engaged.
fn text_body(o: &Overlay) -> StyleDecl {
    let border = if o.state.engaged() {
        format!("1px dashed {}", o.color)
    } else {
        "1px dashed transparent".to_owned()
    };
    vec![
        ("color", o.color.clone()),
        ("resize", "none".to_owned()),
        ("box-sizing", "border-box".to_owned()),
        ("width", px(inner(o.size.width, 30.0))),
        ("height", px(inner(o.size.height, 30.0))),
        ("margin-top", px(15.0)),
        ("margin-left", px(15.0)),
        ("border", border),
        ("border-radius", "8px".to_owned()),
        ("padding", "4px".to_owned()),
        ("outline", "none".to_owned()),
        ("overflow", "hidden".to_owned()),
        ("font-size", px(o.font_size())),
        ("font-weight", "bold".to_owned()),
        ("font-family", FONT_FAMILY.to_owned()),
        ("line-height", "1.3".to_owned()),
        ("background", "transparent".to_owned()),
        (
            "text-shadow",
            "2px 2px 0px #fff, -2px -2px 0px #fff, -2px 2px 0px #fff, 2px -2px 0px #fff, \
             2px 0px 0px #fff, -2px 0px 0px #fff, 0px 2px 0px #fff, 0px -2px 0px #fff, \
             0px 0px 2px #fff"
                .to_owned(),
        ),
        ("box-shadow", "none".to_owned()),
    ]
}

// =============================================================
// Affordance controls
// =============================================================

/// Delete control: a small accent square in the top-right corner.
#[must_use]
pub fn delete_button() -> StyleDecl {
    vec![
        ("position", "absolute".to_owned()),
        ("top", "0".to_owned()),
        ("right", "0".to_owned()),
        ("width", px(20.0)),
        ("height", px(20.0)),
        ("background", ACCENT_COLOR.to_owned()),
        ("color", "white".to_owned()),
        ("display", "flex".to_owned()),
        ("align-items", "center".to_owned()),
        ("justify-content", "center".to_owned()),
        ("cursor", "pointer".to_owned()),
        ("user-select", "none".to_owned()),
        ("visibility", "hidden".to_owned()),
        ("font-size", px(24.0)),
        ("font-family", FONT_FAMILY.to_owned()),
    ]
}

/// Nudges the "×" glyph into the visual center of the delete control.
#[must_use]
pub fn delete_label() -> StyleDecl {
    vec![
        ("margin-top", "-6px".to_owned()),
        ("margin-right", "-1px".to_owned()),
    ]
}

/// Resize handle: striped gradient in the bottom-right corner.
#[must_use]
pub fn resize_handle() -> StyleDecl {
    vec![
        ("position", "absolute".to_owned()),
        ("width", px(20.0)),
        ("height", px(20.0)),
        ("bottom", "0".to_owned()),
        ("right", "0".to_owned()),
        ("background", handle_gradient()),
        ("cursor", "nwse-resize".to_owned()),
        ("visibility", "hidden".to_owned()),
    ]
}

/// Font-size toggle: an "A" control in the bottom-left corner (text box).
#[must_use]
pub fn font_toggle() -> StyleDecl {
    vec![
        ("position", "absolute".to_owned()),
        ("bottom", "0".to_owned()),
        ("left", "0".to_owned()),
        ("width", px(20.0)),
        ("height", px(20.0)),
        ("background", ACCENT_COLOR.to_owned()),
        ("color", "white".to_owned()),
        ("display", "flex".to_owned()),
        ("align-items", "center".to_owned()),
        ("justify-content", "center".to_owned()),
        ("cursor", "pointer".to_owned()),
        ("user-select", "none".to_owned()),
        ("visibility", "hidden".to_owned()),
        ("font-size", px(16.0)),
        ("font-family", FONT_FAMILY.to_owned()),
    ]
}

/// Visibility pair for an affordance control.
#[must_use]
pub fn visibility(shown: bool) -> (&'static str, String) {
    ("visibility", if shown { "visible" } else { "hidden" }.to_owned())
}

// =============================================================
// Menu chrome
// =============================================================

/// Neutralize style inheritance from the host page on menu elements.
#[must_use]
pub fn menu_reset() -> StyleDecl {
    [
        "color",
        "text-decoration",
        "font-family",
        "font-size",
        "font-weight",
        "line-height",
        "letter-spacing",
        "text-align",
        "text-transform",
        "text-indent",
        "background-color",
    ]
    .into_iter()
    .map(|prop| (prop, "initial".to_owned()))
    .collect()
}

/// Menu dialog chrome, including the current phase of the hide transition:
/// fully rendered, mid-hide (scaled down and transparent), or non-rendered.
#[must_use]
pub fn menu_dialog(menu: &Menu) -> StyleDecl {
    let (display, opacity, transform) = if !menu.is_visible() {
        ("none", "0", "scale(0.9)")
    } else if menu.is_hiding() {
        ("block", "0", "scale(0.9)")
    } else {
        ("block", "1", "scale(1)")
    };
    let secs = f64::from(MENU_HIDE_MS) / 1000.0;
    vec![
        ("position", "fixed".to_owned()),
        ("top", "0".to_owned()),
        ("left", "0".to_owned()),
        ("background-color", MENU_BG_COLOR.to_owned()),
        ("color", MENU_TEXT_COLOR.to_owned()),
        ("padding", px(10.0)),
        ("z-index", Z_BASE.to_string()),
        ("font-family", FONT_FAMILY.to_owned()),
        ("transform-origin", "top left".to_owned()),
        (
            "transition",
            format!("transform {secs}s ease, opacity {secs}s ease"),
        ),
        ("display", display.to_owned()),
        ("opacity", opacity.to_owned()),
        ("transform", transform.to_owned()),
    ]
}

/// Close control for the menu.
#[must_use]
pub fn menu_close_button() -> StyleDecl {
    vec![
        ("background-color", "transparent".to_owned()),
        ("color", "white".to_owned()),
        ("border", "none".to_owned()),
        ("cursor", "pointer".to_owned()),
        ("float", "right".to_owned()),
        ("margin-left", px(10.0)),
    ]
}

/// One palette swatch; only the selected swatch carries the outline.
#[must_use]
pub fn swatch(color: &str, selected: bool) -> StyleDecl {
    vec![
        ("background-color", color.to_owned()),
        ("border", "solid 1px rgba(255, 255, 255, .4)".to_owned()),
        ("color", "white".to_owned()),
        ("margin", px(5.0)),
        ("cursor", "pointer".to_owned()),
        ("padding", px(10.0)),
        ("border-radius", "50%".to_owned()),
        ("outline", swatch_outline(selected).1),
    ]
}

/// Outline pair for a swatch, split out so selection changes can be applied
/// without rebuilding the whole declaration.
#[must_use]
pub fn swatch_outline(selected: bool) -> (&'static str, String) {
    let value = if selected {
        format!("2px solid {MENU_TEXT_COLOR}")
    } else {
        "none".to_owned()
    };
    ("outline", value)
}

/// Row of creation buttons.
#[must_use]
pub fn menu_action_row() -> StyleDecl {
    vec![
        ("display", "flex".to_owned()),
        ("gap", px(10.0)),
        ("margin-top", px(8.0)),
    ]
}

/// One creation button holding a variant icon.
#[must_use]
pub fn menu_icon_button() -> StyleDecl {
    vec![
        ("display", "flex".to_owned()),
        ("align-items", "center".to_owned()),
        ("justify-content", "center".to_owned()),
        ("border", "none".to_owned()),
        ("background-color", "transparent".to_owned()),
        ("cursor", "pointer".to_owned()),
        ("width", px(32.0)),
        ("height", px(32.0)),
        ("margin", "0 5px".to_owned()),
    ]
}

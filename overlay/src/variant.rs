//! Overlay variants and their capability records.
//!
//! Variants do not subclass anything: every overlay shares the same state
//! machine and the differences live in one static [`VariantSpec`] per kind —
//! sizing floors, spawn origin, how the body is built, whether presses on the
//! body's input region are ignored, and whether the font-size toggle exists.
//! Restyle differences live in [`crate::style`].

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use crate::consts::MENU_TEXT_COLOR;
use crate::geom::{Point, Size};

/// The rendering kind of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Plain rectangle border.
    Rect,
    /// Rectangle border with rounded corners.
    RoundRect,
    /// Circle (50% border radius).
    Circle,
    /// Editable text region with a font-size toggle.
    TextBox,
    /// Translucent panel that blurs the page behind it.
    Blur,
}

/// How the browser layer constructs the variant's visual body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// A plain styled element.
    Plain,
    /// An editable text region with a placeholder, focused on creation.
    Input,
}

/// Per-variant capabilities, selected once at creation time.
#[derive(Debug, Clone, Copy)]
pub struct VariantSpec {
    /// Extent at creation.
    pub default_size: Size,
    /// Resize floor; both axes clamp here independently.
    pub min_size: Size,
    /// Page-space origin of the spawn cascade for this variant.
    pub spawn_base: Point,
    /// How the visual body is constructed.
    pub body: BodyKind,
    /// Suppress drag-start when the press lands on the body's input region,
    /// so clicking into the text field edits instead of moving the overlay.
    pub ignore_press_on_input: bool,
    /// Whether the font-size cycle affordance exists.
    pub font_toggle: bool,
}

const SHAPE_SPEC: VariantSpec = VariantSpec {
    default_size: Size { width: 200.0, height: 90.0 },
    min_size: Size { width: 60.0, height: 26.0 },
    spawn_base: Point { x: 30.0, y: 120.0 },
    body: BodyKind::Plain,
    ignore_press_on_input: false,
    font_toggle: false,
};

const CIRCLE_SPEC: VariantSpec = VariantSpec {
    default_size: Size { width: 160.0, height: 160.0 },
    min_size: Size { width: 32.0, height: 32.0 },
    ..SHAPE_SPEC
};

const TEXT_BOX_SPEC: VariantSpec = VariantSpec {
    default_size: Size { width: 200.0, height: 90.0 },
    min_size: Size { width: 64.0, height: 64.0 },
    spawn_base: Point { x: 100.0, y: 80.0 },
    body: BodyKind::Input,
    ignore_press_on_input: true,
    font_toggle: true,
};

impl VariantKind {
    /// Every creatable variant, in menu-button order. Icon markup follows
    /// the same order.
    pub const ALL: [VariantKind; 5] = [
        VariantKind::Rect,
        VariantKind::RoundRect,
        VariantKind::Circle,
        VariantKind::TextBox,
        VariantKind::Blur,
    ];

    /// The capability record for this variant.
    #[must_use]
    pub fn spec(self) -> &'static VariantSpec {
        match self {
            VariantKind::Rect | VariantKind::RoundRect | VariantKind::Blur => &SHAPE_SPEC,
            VariantKind::Circle => &CIRCLE_SPEC,
            VariantKind::TextBox => &TEXT_BOX_SPEC,
        }
    }

    /// Menu-button icon markup for this variant.
    #[must_use]
    pub fn icon_svg(self) -> String {
        let c = MENU_TEXT_COLOR;
        match self {
            VariantKind::Rect => format!(
                r#"<svg width="32" height="32"><rect width="24" height="24" x="4" y="4" style="fill:none;stroke:{c};stroke-width:2;"/></svg>"#
            ),
            VariantKind::RoundRect => format!(
                r#"<svg width="32" height="32"><rect x="4" y="4" width="24" height="24" rx="6" ry="6" style="fill:none;stroke:{c};stroke-width:2;"/></svg>"#
            ),
            VariantKind::Circle => format!(
                r#"<svg width="32" height="32"><circle cx="16" cy="16" r="12" style="fill:none;stroke:{c};stroke-width:2;"/></svg>"#
            ),
            VariantKind::TextBox => format!(
                r#"<svg width="32" height="32"><text x="8" y="26" fill="{c}" font-size="26" font-family="Arial">A</text></svg>"#
            ),
            VariantKind::Blur => format!(
                r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><path d="M16 28 C24 28, 28 20, 16 4 C4 20, 8 28, 16 28 Z" style="fill:{c}; stroke:none; opacity:0.5;"/></svg>"#
            ),
        }
    }
}

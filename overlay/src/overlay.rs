//! One placed overlay: position, size, color, and gesture handling.
//!
//! Positions are in page coordinates (document-relative). Pointer samples
//! arrive in client coordinates together with the current scroll offset, so
//! dragging an overlay on a scrolled page keeps it under the pointer.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::consts::{DELETE_MIN_HEIGHT, FONT_SIZES, SPAWN_STEP, Z_BASE};
use crate::geom::{Point, Size, client_from_page, page_from_client};
use crate::interaction::InteractionState;
use crate::variant::VariantKind;

/// Unique identifier for a placed overlay. Positive, strictly increasing in
/// creation order, never reused.
pub type OverlayId = u32;

/// Which affordance controls are currently visible on an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub resize_handle: bool,
    pub delete: bool,
    pub font_toggle: bool,
}

/// One placed annotation.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Creation-order id; also the layering tie-break.
    pub id: OverlayId,
    /// Rendering kind; fixed at creation.
    pub kind: VariantKind,
    /// Top-left corner in page coordinates.
    pub pos: Point,
    /// Extent in CSS pixels; never below the variant floor.
    pub size: Size,
    /// Fill/stroke/text color assigned at creation.
    pub color: String,
    /// Index into the font-size cycle (text box only).
    pub font_index: usize,
    /// Current gesture state.
    pub state: InteractionState,
}

impl Overlay {
    /// Place a new overlay. Each successive id spawns [`SPAWN_STEP`] further
    /// right and down from the variant's base margin, compensated by the
    /// current scroll, so stacked creations stay visually distinguishable.
    #[must_use]
    pub fn place(id: OverlayId, kind: VariantKind, color: String, scroll: Point) -> Self {
        let spec = kind.spec();
        let step = f64::from(id.saturating_sub(1)) * SPAWN_STEP;
        Self {
            id,
            kind,
            pos: Point::new(
                scroll.x + spec.spawn_base.x + step,
                scroll.y + spec.spawn_base.y + step,
            ),
            size: spec.default_size,
            color,
            font_index: 0,
            state: InteractionState::Idle,
        }
    }

    /// Layering value; assigned once at creation and never changed, so later
    /// overlays always render above earlier ones.
    #[must_use]
    pub fn z_order(&self) -> i64 {
        Z_BASE + i64::from(self.id)
    }

    #[must_use]
    pub fn min_size(&self) -> Size {
        self.kind.spec().min_size
    }

    /// Current text size from the font cycle.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        FONT_SIZES[self.font_index % FONT_SIZES.len()]
    }

    /// Advance the font cycle, wrapping after the last entry. No-op for
    /// variants without the toggle. Returns whether anything changed.
    pub fn cycle_font_size(&mut self) -> bool {
        if !self.kind.spec().font_toggle {
            return false;
        }
        self.font_index = (self.font_index + 1) % FONT_SIZES.len();
        true
    }

    /// Whether a client-space point falls inside the overlay's page bounds.
    #[must_use]
    pub fn contains(&self, client: Point, scroll: Point) -> bool {
        let p = page_from_client(client, scroll);
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.width
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.height
    }

    // ── Gestures ────────────────────────────────────────────────

    /// Start a drag: record where inside the overlay the press landed and
    /// enter Dragging.
    pub fn begin_drag(&mut self, client: Point, scroll: Point) {
        let top_left = client_from_page(self.pos, scroll);
        self.state = InteractionState::Dragging {
            grab: Point::new(client.x - top_left.x, client.y - top_left.y),
        };
    }

    /// Follow the pointer while Dragging: the recorded grab offset keeps the
    /// press point stationary under the pointer. Returns whether the
    /// position changed.
    pub fn drag_to(&mut self, client: Point, scroll: Point) -> bool {
        let InteractionState::Dragging { grab } = self.state else {
            return false;
        };
        self.pos = Point::new(client.x - grab.x + scroll.x, client.y - grab.y + scroll.y);
        true
    }

    /// Start a resize from the handle and record the pointer sample.
    pub fn begin_resize(&mut self, client: Point) {
        self.state = InteractionState::Resizing { last: client };
    }

    /// Grow by the delta since the previous sample, clamped to the variant
    /// floor on each axis, then advance the recorded sample so resizing is
    /// incremental. Returns whether the size changed.
    pub fn resize_to(&mut self, client: Point) -> bool {
        let InteractionState::Resizing { last } = self.state else {
            return false;
        };
        let grown = Size::new(
            self.size.width + (client.x - last.x),
            self.size.height + (client.y - last.y),
        );
        self.size = grown.clamp_min(self.min_size());
        self.state = InteractionState::Resizing { last: client };
        true
    }

    /// Release the active gesture. Stays Hovering when the pointer is still
    /// over the overlay, otherwise returns to Idle.
    pub fn end_interaction(&mut self, over: bool) {
        if self.state.is_dragging() || self.state.is_resizing() {
            self.state = if over {
                InteractionState::Hovering
            } else {
                InteractionState::Idle
            };
        }
    }

    /// Pointer entered the overlay's bounds.
    pub fn hover_enter(&mut self) {
        if matches!(self.state, InteractionState::Idle) {
            self.state = InteractionState::Hovering;
        }
    }

    /// Pointer left the overlay's bounds. Only Hovering drops back to Idle:
    /// an in-flight drag or resize continues until release.
    pub fn hover_leave(&mut self) {
        if matches!(self.state, InteractionState::Hovering) {
            self.state = InteractionState::Idle;
        }
    }

    // ── Affordances ─────────────────────────────────────────────

    /// Visibility of the overlay's controls. All are gated on engagement;
    /// the delete control additionally hides while the overlay is shorter
    /// than [`DELETE_MIN_HEIGHT`]. Because an in-flight resize keeps the
    /// overlay engaged, the handle stays visible even when the pointer has
    /// left the bounds mid-resize.
    #[must_use]
    pub fn affordances(&self) -> Affordances {
        let engaged = self.state.engaged();
        Affordances {
            resize_handle: engaged,
            delete: engaged && self.size.height >= DELETE_MIN_HEIGHT,
            font_toggle: engaged && self.kind.spec().font_toggle,
        }
    }
}

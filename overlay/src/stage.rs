//! The stage: every live overlay plus shared pointer dispatch.
//!
//! Document-level pointer events are delivered once and routed here, not to
//! per-overlay listeners. At most one overlay owns the active gesture at any
//! time (single pointer device), so move/up routing is a lookup of the active
//! owner rather than a broadcast. Deleting an overlay mid-gesture clears the
//! owner in the same call, which is all the cleanup a shared dispatcher
//! needs — there are no per-overlay document listeners to unregister.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use std::collections::HashMap;

use crate::geom::Point;
use crate::overlay::{Overlay, OverlayId};

/// What the browser layer must apply after a routed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Position changed; re-apply the container layout.
    Moved { id: OverlayId },
    /// Size, state, or font changed; re-apply container, body, and
    /// affordance visibility.
    Updated { id: OverlayId },
    /// The overlay is gone; detach its subtree.
    Removed { id: OverlayId },
}

/// Live overlays and the active gesture owner.
#[derive(Debug, Default)]
pub struct Stage {
    overlays: HashMap<OverlayId, Overlay>,
    active: Option<OverlayId>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Add a newly placed overlay. An existing overlay with the same id is
    /// replaced, though ids never repeat in practice.
    pub fn insert(&mut self, overlay: Overlay) {
        self.overlays.insert(overlay.id, overlay);
    }

    /// Remove an overlay. If it owned the active gesture the owner is
    /// cleared immediately so no further pointer routing references it.
    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: OverlayId) -> Effect {
        if self.overlays.remove(&id).is_none() {
            return Effect::None;
        }
        if self.active == Some(id) {
            self.active = None;
        }
        Effect::Removed { id }
    }

    // ── Queries ─────────────────────────────────────────────────

    #[must_use]
    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.get(&id)
    }

    /// All live overlays in creation (and therefore layering) order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&Overlay> {
        let mut overlays: Vec<&Overlay> = self.overlays.values().collect();
        overlays.sort_by_key(|o| o.id);
        overlays
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// The overlay currently Dragging or Resizing, if any.
    #[must_use]
    pub fn active(&self) -> Option<OverlayId> {
        self.active
    }

    // ── Gesture routing ─────────────────────────────────────────

    /// A press on an overlay accepted as a drag start.
    pub fn begin_drag(&mut self, id: OverlayId, client: Point, scroll: Point) -> Effect {
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return Effect::None;
        };
        overlay.begin_drag(client, scroll);
        self.active = Some(id);
        Effect::Updated { id }
    }

    /// A press on an overlay's resize handle.
    pub fn begin_resize(&mut self, id: OverlayId, client: Point) -> Effect {
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return Effect::None;
        };
        overlay.begin_resize(client);
        self.active = Some(id);
        Effect::Updated { id }
    }

    /// Document-level pointer move: forwarded to the active owner, applied
    /// synchronously so the visible position always reflects the latest
    /// sample.
    pub fn pointer_moved(&mut self, client: Point, scroll: Point) -> Effect {
        let Some(id) = self.active else {
            return Effect::None;
        };
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return Effect::None;
        };
        if overlay.drag_to(client, scroll) {
            Effect::Moved { id }
        } else if overlay.resize_to(client) {
            Effect::Updated { id }
        } else {
            Effect::None
        }
    }

    /// Document-level pointer release: ends the active gesture. The owner
    /// stays Hovering only if the pointer is still over its bounds.
    pub fn pointer_up(&mut self, client: Point, scroll: Point) -> Effect {
        let Some(id) = self.active.take() else {
            return Effect::None;
        };
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return Effect::None;
        };
        let over = overlay.contains(client, scroll);
        overlay.end_interaction(over);
        Effect::Updated { id }
    }

    /// Pointer entered an overlay's bounds.
    pub fn hover_enter(&mut self, id: OverlayId) -> Effect {
        self.update_overlay(id, Overlay::hover_enter)
    }

    /// Pointer left an overlay's bounds.
    pub fn hover_leave(&mut self, id: OverlayId) -> Effect {
        self.update_overlay(id, Overlay::hover_leave)
    }

    /// Font-size toggle clicked on a text box overlay.
    pub fn cycle_font_size(&mut self, id: OverlayId) -> Effect {
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return Effect::None;
        };
        if overlay.cycle_font_size() {
            Effect::Updated { id }
        } else {
            Effect::None
        }
    }

    fn update_overlay(&mut self, id: OverlayId, f: impl FnOnce(&mut Overlay)) -> Effect {
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return Effect::None;
        };
        let before = overlay.state;
        f(overlay);
        if overlay.state == before {
            Effect::None
        } else {
            Effect::Updated { id }
        }
    }
}

//! Creation menu state: color selection, id allocation, and visibility.
//!
//! Created once per session and never destroyed. The menu owns the overlay
//! id counter so ids stay strictly increasing across every variant.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{MENU_REVEAL_PX, PALETTE};
use crate::geom::Point;
use crate::overlay::OverlayId;

/// Floating-menu state.
#[derive(Debug, Clone)]
pub struct Menu {
    /// Index of the selected palette entry.
    selected: usize,
    /// How many overlays have been created; drives the next id.
    created: OverlayId,
    /// Whether the dialog is rendered at all.
    visible: bool,
    /// Whether the hide transition is in flight.
    hiding: bool,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            selected: 0,
            created: 0,
            visible: true,
            hiding: false,
        }
    }
}

impl Menu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Color selection ─────────────────────────────────────────

    /// The color applied to newly created overlays. Defaults to the
    /// palette's first entry.
    #[must_use]
    pub fn selected_color(&self) -> &'static str {
        PALETTE.get(self.selected).copied().unwrap_or(PALETTE[0])
    }

    /// Select a palette entry; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < PALETTE.len() {
            self.selected = index;
        }
    }

    /// Whether swatch `index` should show the highlighted outline. True for
    /// exactly one index at any time.
    #[must_use]
    pub fn swatch_selected(&self, index: usize) -> bool {
        index == self.selected
    }

    // ── Id allocation ───────────────────────────────────────────

    /// Allocate the next overlay id. Ids start at 1 and never repeat.
    pub fn next_id(&mut self) -> OverlayId {
        self.created += 1;
        self.created
    }

    /// How many overlays have been created so far.
    #[must_use]
    pub fn created(&self) -> OverlayId {
        self.created
    }

    // ── Visibility ──────────────────────────────────────────────

    /// Whether a client-space pointer position is inside the reveal region
    /// near the top-left viewport corner.
    #[must_use]
    pub fn pointer_near_corner(client: Point) -> bool {
        client.x < MENU_REVEAL_PX && client.y < MENU_REVEAL_PX
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.hiding
    }

    /// Show the dialog, cancelling the visual effect of any in-flight hide.
    /// Returns whether the rendered state changed.
    pub fn reveal(&mut self) -> bool {
        if self.visible && !self.hiding {
            return false;
        }
        self.visible = true;
        self.hiding = false;
        true
    }

    /// Start the hide transition. Returns whether it started.
    pub fn begin_hide(&mut self) -> bool {
        if !self.visible || self.hiding {
            return false;
        }
        self.hiding = true;
        true
    }

    /// Finalize a hide after the transition delay. The delay is
    /// fire-and-forget: if the menu was re-revealed in the meantime,
    /// `hiding` is already clear and this is a no-op. Returns whether the
    /// dialog became non-rendered.
    pub fn finish_hide(&mut self) -> bool {
        if !self.hiding {
            return false;
        }
        self.hiding = false;
        self.visible = false;
        true
    }
}

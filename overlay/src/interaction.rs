//! The per-overlay gesture state machine.
//!
//! Exactly one state holds at any instant. The active-gesture variants carry
//! the context needed to compute incremental deltas on each pointer sample:
//! dragging records where inside the overlay the press landed, resizing
//! records the previous pointer position so growth is relative, not absolute.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use crate::geom::Point;

/// Interaction state of one overlay.
///
/// Transitions: `Idle --enter--> Hovering`; `Hovering --press--> Dragging`
/// (unless the variant ignores the press); `Hovering --press on handle-->
/// Resizing`; `Dragging | Resizing --release--> Hovering | Idle` depending on
/// whether the pointer is still over the overlay; `Hovering --leave--> Idle`.
/// Leave has no effect while a drag or resize is in flight — the gesture
/// continues until release even when the pointer is outside the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    /// No interaction; affordances hidden.
    Idle,
    /// Pointer is over the overlay; affordances shown.
    Hovering,
    /// The overlay follows the pointer.
    Dragging {
        /// Pointer offset from the overlay's client-space top-left at press.
        grab: Point,
    },
    /// The bottom-right corner follows the pointer.
    Resizing {
        /// Client-space pointer position at the previous resize sample.
        last: Point,
    },
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InteractionState {
    /// Whether the overlay is hovered or mid-gesture; gates affordance
    /// visibility and the accent outline.
    #[must_use]
    pub fn engaged(self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn is_resizing(self) -> bool {
        matches!(self, Self::Resizing { .. })
    }
}

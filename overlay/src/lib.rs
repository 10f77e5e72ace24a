//! Interaction core for the Scrawl page-annotation overlays.
//!
//! This crate owns everything that does not require a browser: the geometry
//! of placed overlays, the per-overlay drag/resize/hover state machine, the
//! variant capability table, pure restyle computation, the creation menu's
//! state, and the stage that routes shared pointer events to whichever
//! overlay owns the active gesture. The host crate is responsible only for
//! building DOM nodes, wiring events into the [`stage::Stage`], and applying
//! the returned style descriptors.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Points, sizes, and client⇄page coordinate conversion |
//! | [`consts`] | Static configuration (palette, z-order base, thresholds) |
//! | [`interaction`] | The Idle/Hovering/Dragging/Resizing state machine |
//! | [`variant`] | Overlay variants and their capability records |
//! | [`overlay`] | One placed overlay: position, size, gesture handling |
//! | [`style`] | Pure `(state, size, color) → style descriptor` functions |
//! | [`menu`] | Creation menu state: selection, id allocation, visibility |
//! | [`stage`] | Live-overlay set and shared pointer dispatch |

pub mod consts;
pub mod geom;
pub mod interaction;
pub mod menu;
pub mod overlay;
pub mod stage;
pub mod style;
pub mod variant;

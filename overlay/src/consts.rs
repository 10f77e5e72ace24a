//! Static configuration shared by the core and the browser layer.

// ── Layering ────────────────────────────────────────────────────

/// Base z-order for placed overlays; an overlay renders at `Z_BASE + id`.
///
/// Far enough below the host maximum (2_147_483_647) that any realistic
/// number of creations stays within range, and far enough above typical page
/// chrome that overlays always sit on top of the host content.
pub const Z_BASE: i64 = 2_147_483_500;

// ── Colors ──────────────────────────────────────────────────────

/// Ordered palette offered by the menu. The first entry is the default
/// selection.
pub const PALETTE: [&str; 5] = ["#D52753", "#23974A", "#DF631C", "#275FE4", "#26272D"];

/// Menu chrome text color.
pub const MENU_TEXT_COLOR: &str = "#FFFEFE";

/// Menu chrome background color.
pub const MENU_BG_COLOR: &str = "#292D3E";

/// Accent for engaged-overlay outlines and affordance controls.
pub const ACCENT_COLOR: &str = "rgb(107, 114, 128)";

// ── Typography ──────────────────────────────────────────────────

/// Shared font stack for menu chrome, affordance labels, and text overlays.
pub const FONT_FAMILY: &str =
    r#""Helvetica Neue", Arial, "Hiragino Kaku Gothic ProN", "Hiragino Sans", Meiryo, sans-serif"#;

/// Ordered font-size cycle for the text box toggle, in CSS pixels. The
/// toggle advances through the list and wraps from the last entry back to
/// the first.
pub const FONT_SIZES: [f64; 3] = [18.0, 24.0, 36.0];

// ── Interaction thresholds ──────────────────────────────────────

/// The menu reveals itself while both pointer coordinates are under this.
pub const MENU_REVEAL_PX: f64 = 50.0;

/// Duration of the menu's scale/opacity hide transition, after which it is
/// toggled fully non-rendered.
pub const MENU_HIDE_MS: u32 = 180;

/// The delete control is hidden while the overlay is shorter than this.
pub const DELETE_MIN_HEIGHT: f64 = 40.0;

/// Per-id spawn cascade step: each successive overlay starts this much
/// further right and down from the previous one.
pub const SPAWN_STEP: f64 = 15.0;

// ── Derived markup ──────────────────────────────────────────────

/// Diagonal-stripe gradient for the resize handle, derived from the accent.
#[must_use]
pub fn handle_gradient() -> String {
    format!(
        "linear-gradient(135deg, rgba(0,0,0,0) 60%, {a} 60%, {a} 70%, rgba(0,0,0,0) 70%, \
         rgba(0,0,0,0) 80%, {a} 80%, {a} 90%, rgba(0,0,0,0) 90%)",
        a = ACCENT_COLOR
    )
}

#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::PALETTE;

// =============================================================
// Helpers
// =============================================================

fn no_scroll() -> Point {
    Point::new(0.0, 0.0)
}

fn make(id: OverlayId, kind: VariantKind) -> Overlay {
    Overlay::place(id, kind, PALETTE[0].to_owned(), no_scroll())
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Placement
// =============================================================

#[test]
fn first_overlay_spawns_at_variant_base() {
    let o = make(1, VariantKind::Rect);
    assert_eq!(o.pos, pt(30.0, 120.0));
    assert_eq!(o.size, Size::new(200.0, 90.0));
    assert_eq!(o.state, InteractionState::Idle);
}

#[test]
fn successive_overlays_cascade_by_spawn_step() {
    let a = make(1, VariantKind::Rect);
    let b = make(2, VariantKind::Rect);
    let c = make(3, VariantKind::Rect);
    assert_eq!(b.pos, pt(a.pos.x + 15.0, a.pos.y + 15.0));
    assert_eq!(c.pos, pt(a.pos.x + 30.0, a.pos.y + 30.0));
}

#[test]
fn placement_compensates_for_scroll() {
    let o = Overlay::place(1, VariantKind::Rect, PALETTE[0].to_owned(), pt(500.0, 1000.0));
    assert_eq!(o.pos, pt(530.0, 1120.0));
}

#[test]
fn text_box_spawns_from_its_base_with_cascade() {
    let o = make(3, VariantKind::TextBox);
    assert_eq!(o.pos, pt(100.0 + 30.0, 80.0 + 30.0));
}

#[test]
fn placement_keeps_assigned_color() {
    let o = Overlay::place(1, VariantKind::Circle, "#275FE4".to_owned(), no_scroll());
    assert_eq!(o.color, "#275FE4");
}

// =============================================================
// Layering
// =============================================================

#[test]
fn z_order_is_base_plus_id() {
    assert_eq!(make(1, VariantKind::Rect).z_order(), crate::consts::Z_BASE + 1);
    assert_eq!(make(7, VariantKind::Rect).z_order(), crate::consts::Z_BASE + 7);
}

#[test]
fn z_order_strictly_increases_with_creation_order() {
    let mut prev = 0;
    for id in 1..=50 {
        let z = make(id, VariantKind::Blur).z_order();
        assert!(z > prev, "overlay {id} does not render above its predecessors");
        prev = z;
    }
}

#[test]
fn z_order_stays_below_host_maximum() {
    assert!(make(100, VariantKind::Rect).z_order() < 2_147_483_647);
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn drag_moves_by_exact_pointer_delta() {
    let mut o = make(1, VariantKind::Rect);
    let start = o.pos;
    o.begin_drag(pt(100.0, 100.0), no_scroll());
    assert!(o.state.is_dragging());

    assert!(o.drag_to(pt(150.0, 130.0), no_scroll()));
    assert_eq!(o.pos, pt(start.x + 50.0, start.y + 30.0));
}

#[test]
fn drag_keeps_grab_point_under_pointer() {
    let mut o = make(1, VariantKind::Rect);
    // Press 10px into the overlay from its top-left.
    o.begin_drag(pt(o.pos.x + 10.0, o.pos.y + 10.0), no_scroll());
    o.drag_to(pt(300.0, 200.0), no_scroll());
    assert_eq!(o.pos, pt(290.0, 190.0));
}

#[test]
fn drag_accounts_for_scroll_offset() {
    let scroll = pt(0.0, 400.0);
    let mut o = Overlay::place(1, VariantKind::Rect, PALETTE[0].to_owned(), scroll);
    let start = o.pos;
    // Client coordinates are page minus scroll.
    o.begin_drag(pt(start.x, start.y - 400.0), scroll);
    o.drag_to(pt(start.x + 25.0, start.y - 400.0 + 10.0), scroll);
    assert_eq!(o.pos, pt(start.x + 25.0, start.y + 10.0));
}

#[test]
fn drag_to_without_active_drag_is_a_no_op() {
    let mut o = make(1, VariantKind::Rect);
    let start = o.pos;
    assert!(!o.drag_to(pt(500.0, 500.0), no_scroll()));
    assert_eq!(o.pos, start);
}

// =============================================================
// Resizing
// =============================================================

#[test]
fn resize_grows_by_pointer_delta() {
    let mut o = make(1, VariantKind::Rect);
    o.begin_resize(pt(230.0, 210.0));
    assert!(o.resize_to(pt(270.0, 240.0)));
    assert_eq!(o.size, Size::new(240.0, 120.0));
}

#[test]
fn resize_is_incremental_across_samples() {
    let mut o = make(1, VariantKind::Rect);
    o.begin_resize(pt(0.0, 0.0));
    o.resize_to(pt(10.0, 10.0));
    o.resize_to(pt(30.0, 15.0));
    assert_eq!(o.size, Size::new(230.0, 105.0));
}

#[test]
fn resize_clamps_at_variant_floor() {
    let mut o = make(1, VariantKind::Rect);
    o.begin_resize(pt(0.0, 0.0));
    o.resize_to(pt(-500.0, -500.0));
    assert_eq!(o.size, Size::new(60.0, 26.0));
}

#[test]
fn every_resize_step_respects_the_floor() {
    let mut o = make(1, VariantKind::TextBox);
    o.begin_resize(pt(0.0, 0.0));
    let samples = [
        pt(-1000.0, -1000.0),
        pt(-999.0, 40.0),
        pt(3.0, -2000.0),
        pt(500.0, 500.0),
        pt(-10_000.0, -10_000.0),
    ];
    for sample in samples {
        o.resize_to(sample);
        let min = o.min_size();
        assert!(o.size.width >= min.width, "width fell below floor at {sample:?}");
        assert!(o.size.height >= min.height, "height fell below floor at {sample:?}");
    }
}

#[test]
fn resize_recovers_from_the_floor_relative_to_pointer() {
    let mut o = make(1, VariantKind::Rect);
    o.begin_resize(pt(0.0, 0.0));
    o.resize_to(pt(-500.0, -500.0));
    // Pulling back out grows from the clamped floor, not the original size.
    o.resize_to(pt(-460.0, -480.0));
    assert_eq!(o.size, Size::new(100.0, 46.0));
}

#[test]
fn circle_clamps_at_its_own_floor() {
    let mut o = make(1, VariantKind::Circle);
    o.begin_resize(pt(0.0, 0.0));
    o.resize_to(pt(-500.0, -500.0));
    assert_eq!(o.size, Size::new(32.0, 32.0));
}

#[test]
fn resize_to_without_active_resize_is_a_no_op() {
    let mut o = make(1, VariantKind::Rect);
    let size = o.size;
    assert!(!o.resize_to(pt(999.0, 999.0)));
    assert_eq!(o.size, size);
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn hover_enter_from_idle_only() {
    let mut o = make(1, VariantKind::Rect);
    o.hover_enter();
    assert_eq!(o.state, InteractionState::Hovering);

    o.begin_drag(pt(0.0, 0.0), no_scroll());
    o.hover_enter();
    assert!(o.state.is_dragging(), "enter must not interrupt a drag");
}

#[test]
fn hover_leave_only_clears_hovering() {
    let mut o = make(1, VariantKind::Rect);
    o.hover_enter();
    o.hover_leave();
    assert_eq!(o.state, InteractionState::Idle);

    o.begin_resize(pt(0.0, 0.0));
    o.hover_leave();
    assert!(o.state.is_resizing(), "leave must not interrupt a resize");
}

#[test]
fn release_over_overlay_returns_to_hovering() {
    let mut o = make(1, VariantKind::Rect);
    o.begin_drag(pt(o.pos.x + 5.0, o.pos.y + 5.0), no_scroll());
    o.end_interaction(true);
    assert_eq!(o.state, InteractionState::Hovering);
}

#[test]
fn release_away_from_overlay_returns_to_idle() {
    let mut o = make(1, VariantKind::Rect);
    o.begin_resize(pt(0.0, 0.0));
    o.end_interaction(false);
    assert_eq!(o.state, InteractionState::Idle);
}

#[test]
fn release_without_gesture_changes_nothing() {
    let mut o = make(1, VariantKind::Rect);
    o.hover_enter();
    o.end_interaction(false);
    assert_eq!(o.state, InteractionState::Hovering);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn contains_its_own_corners() {
    let o = make(1, VariantKind::Rect);
    assert!(o.contains(pt(o.pos.x, o.pos.y), no_scroll()));
    assert!(o.contains(pt(o.pos.x + o.size.width, o.pos.y + o.size.height), no_scroll()));
}

#[test]
fn does_not_contain_points_outside() {
    let o = make(1, VariantKind::Rect);
    assert!(!o.contains(pt(o.pos.x - 1.0, o.pos.y), no_scroll()));
    assert!(!o.contains(pt(o.pos.x, o.pos.y + o.size.height + 1.0), no_scroll()));
}

#[test]
fn contains_respects_scroll() {
    let o = make(1, VariantKind::Rect);
    let scroll = pt(0.0, 100.0);
    // Client point 100px above the page position lands on the overlay.
    assert!(o.contains(pt(o.pos.x + 1.0, o.pos.y - 99.0), scroll));
}

// =============================================================
// Affordances
// =============================================================

#[test]
fn idle_overlay_shows_no_affordances() {
    let o = make(1, VariantKind::TextBox);
    let a = o.affordances();
    assert!(!a.resize_handle);
    assert!(!a.delete);
    assert!(!a.font_toggle);
}

#[test]
fn hovering_shows_handle_and_delete() {
    let mut o = make(1, VariantKind::Rect);
    o.hover_enter();
    let a = o.affordances();
    assert!(a.resize_handle);
    assert!(a.delete);
    assert!(!a.font_toggle, "plain shapes have no font toggle");
}

#[test]
fn delete_hides_below_minimum_height() {
    let mut o = make(1, VariantKind::Rect);
    o.hover_enter();
    o.size.height = 39.0;
    assert!(!o.affordances().delete);
    o.size.height = 40.0;
    assert!(o.affordances().delete);
}

#[test]
fn handle_stays_visible_while_resizing_out_of_bounds() {
    let mut o = make(1, VariantKind::Rect);
    o.begin_resize(pt(0.0, 0.0));
    o.hover_leave();
    assert!(o.affordances().resize_handle);
}

#[test]
fn font_toggle_only_on_text_box() {
    let mut o = make(1, VariantKind::TextBox);
    o.hover_enter();
    assert!(o.affordances().font_toggle);
}

// =============================================================
// Font cycle
// =============================================================

#[test]
fn font_cycle_walks_the_list_in_order_and_wraps() {
    let mut o = make(1, VariantKind::TextBox);
    let mut seen = vec![o.font_size()];
    for _ in 0..crate::consts::FONT_SIZES.len() {
        assert!(o.cycle_font_size());
        seen.push(o.font_size());
    }
    assert_eq!(&seen[..crate::consts::FONT_SIZES.len()], &crate::consts::FONT_SIZES[..]);
    assert_eq!(
        seen[crate::consts::FONT_SIZES.len()],
        crate::consts::FONT_SIZES[0],
        "cycle must wrap back to the first entry"
    );
}

#[test]
fn font_cycle_is_a_no_op_for_other_variants() {
    let mut o = make(1, VariantKind::Circle);
    assert!(!o.cycle_font_size());
    assert_eq!(o.font_size(), crate::consts::FONT_SIZES[0]);
}

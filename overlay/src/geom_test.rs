#![allow(clippy::float_cmp)]

use super::*;

// --- Point / Size ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn size_new() {
    let s = Size::new(200.0, 90.0);
    assert_eq!(s.width, 200.0);
    assert_eq!(s.height, 90.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- clamp_min ---

#[test]
fn clamp_min_leaves_large_sizes_alone() {
    let s = Size::new(200.0, 90.0).clamp_min(Size::new(60.0, 26.0));
    assert_eq!(s, Size::new(200.0, 90.0));
}

#[test]
fn clamp_min_floors_each_axis_independently() {
    let s = Size::new(10.0, 90.0).clamp_min(Size::new(60.0, 26.0));
    assert_eq!(s, Size::new(60.0, 90.0));

    let s = Size::new(200.0, 5.0).clamp_min(Size::new(60.0, 26.0));
    assert_eq!(s, Size::new(200.0, 26.0));
}

#[test]
fn clamp_min_handles_negative_sizes() {
    let s = Size::new(-500.0, -500.0).clamp_min(Size::new(60.0, 26.0));
    assert_eq!(s, Size::new(60.0, 26.0));
}

// --- Coordinate conversion ---

#[test]
fn page_from_client_adds_scroll() {
    let p = page_from_client(Point::new(100.0, 50.0), Point::new(10.0, 20.0));
    assert_eq!(p, Point::new(110.0, 70.0));
}

#[test]
fn client_from_page_subtracts_scroll() {
    let p = client_from_page(Point::new(110.0, 70.0), Point::new(10.0, 20.0));
    assert_eq!(p, Point::new(100.0, 50.0));
}

#[test]
fn conversion_round_trip() {
    let scroll = Point::new(33.0, -7.0);
    let client = Point::new(400.0, 300.0);
    let back = client_from_page(page_from_client(client, scroll), scroll);
    assert_eq!(back, client);
}

#[test]
fn zero_scroll_is_identity() {
    let p = Point::new(12.5, 99.0);
    assert_eq!(page_from_client(p, Point::new(0.0, 0.0)), p);
    assert_eq!(client_from_page(p, Point::new(0.0, 0.0)), p);
}

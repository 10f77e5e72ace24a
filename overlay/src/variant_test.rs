use super::*;

#[test]
fn all_lists_every_variant_once() {
    assert_eq!(VariantKind::ALL.len(), 5);
    for (i, a) in VariantKind::ALL.iter().enumerate() {
        for (j, b) in VariantKind::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// --- Capability records ---

#[test]
fn shapes_share_default_floor() {
    for kind in [VariantKind::Rect, VariantKind::RoundRect, VariantKind::Blur] {
        let spec = kind.spec();
        assert_eq!(spec.min_size, Size { width: 60.0, height: 26.0 });
        assert_eq!(spec.default_size, Size { width: 200.0, height: 90.0 });
        assert_eq!(spec.body, BodyKind::Plain);
        assert!(!spec.ignore_press_on_input);
        assert!(!spec.font_toggle);
    }
}

#[test]
fn circle_spawns_square_with_smaller_floor() {
    let spec = VariantKind::Circle.spec();
    assert_eq!(spec.default_size, Size { width: 160.0, height: 160.0 });
    assert_eq!(spec.min_size, Size { width: 32.0, height: 32.0 });
    assert_eq!(spec.body, BodyKind::Plain);
}

#[test]
fn text_box_is_the_only_input_variant() {
    let spec = VariantKind::TextBox.spec();
    assert_eq!(spec.body, BodyKind::Input);
    assert!(spec.ignore_press_on_input);
    assert!(spec.font_toggle);
    assert_eq!(spec.min_size, Size { width: 64.0, height: 64.0 });

    for kind in VariantKind::ALL {
        if kind != VariantKind::TextBox {
            assert_eq!(kind.spec().body, BodyKind::Plain);
            assert!(!kind.spec().font_toggle);
        }
    }
}

#[test]
fn text_box_spawns_from_its_own_base() {
    assert_eq!(VariantKind::TextBox.spec().spawn_base, Point { x: 100.0, y: 80.0 });
    assert_eq!(VariantKind::Rect.spec().spawn_base, Point { x: 30.0, y: 120.0 });
}

// --- Icons ---

#[test]
fn every_variant_has_svg_icon_markup() {
    for kind in VariantKind::ALL {
        let svg = kind.icon_svg();
        assert!(svg.starts_with("<svg"), "{kind:?} icon is not svg: {svg}");
        assert!(svg.ends_with("</svg>"));
    }
}

#[test]
fn icons_are_distinct_per_variant() {
    for (i, a) in VariantKind::ALL.iter().enumerate() {
        for b in &VariantKind::ALL[i + 1..] {
            assert_ne!(a.icon_svg(), b.icon_svg());
        }
    }
}

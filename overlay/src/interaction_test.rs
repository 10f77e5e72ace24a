use super::*;

#[test]
fn default_is_idle() {
    assert_eq!(InteractionState::default(), InteractionState::Idle);
}

#[test]
fn idle_is_not_engaged() {
    assert!(!InteractionState::Idle.engaged());
}

#[test]
fn hovering_dragging_resizing_are_engaged() {
    assert!(InteractionState::Hovering.engaged());
    assert!(InteractionState::Dragging { grab: Point::new(0.0, 0.0) }.engaged());
    assert!(InteractionState::Resizing { last: Point::new(0.0, 0.0) }.engaged());
}

#[test]
fn is_dragging_matches_only_dragging() {
    assert!(InteractionState::Dragging { grab: Point::new(1.0, 2.0) }.is_dragging());
    assert!(!InteractionState::Idle.is_dragging());
    assert!(!InteractionState::Hovering.is_dragging());
    assert!(!InteractionState::Resizing { last: Point::new(1.0, 2.0) }.is_dragging());
}

#[test]
fn is_resizing_matches_only_resizing() {
    assert!(InteractionState::Resizing { last: Point::new(1.0, 2.0) }.is_resizing());
    assert!(!InteractionState::Idle.is_resizing());
    assert!(!InteractionState::Hovering.is_resizing());
    assert!(!InteractionState::Dragging { grab: Point::new(1.0, 2.0) }.is_resizing());
}

#[test]
fn dragging_carries_grab_offset() {
    let s = InteractionState::Dragging { grab: Point::new(12.0, 34.0) };
    let InteractionState::Dragging { grab } = s else {
        panic!("expected Dragging");
    };
    assert_eq!(grab, Point::new(12.0, 34.0));
}

#[test]
fn resizing_carries_last_sample() {
    let s = InteractionState::Resizing { last: Point::new(56.0, 78.0) };
    let InteractionState::Resizing { last } = s else {
        panic!("expected Resizing");
    };
    assert_eq!(last, Point::new(56.0, 78.0));
}

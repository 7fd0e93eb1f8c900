use glam::Vec2;
use super::*;

// ============================================================================
// CameraMovement::from_key
// ============================================================================

#[test]
fn test_wasd_mapping() {
    assert_eq!(CameraMovement::from_key('W'), Some(CameraMovement::Forward));
    assert_eq!(CameraMovement::from_key('s'), Some(CameraMovement::Backward));
    assert_eq!(CameraMovement::from_key('A'), Some(CameraMovement::Left));
    assert_eq!(CameraMovement::from_key('d'), Some(CameraMovement::Right));
}

#[test]
fn test_unmapped_key_is_none() {
    assert_eq!(CameraMovement::from_key('Q'), None);
    assert_eq!(CameraMovement::from_key(' '), None);
}

// ============================================================================
// MouseTracker
// ============================================================================

#[test]
fn test_first_sample_yields_zero_offset() {
    let mut tracker = MouseTracker::new();
    assert_eq!(tracker.offset(Vec2::new(640.0, 360.0)), (0.0, 0.0));
}

#[test]
fn test_offsets_invert_y() {
    let mut tracker = MouseTracker::with_position(Vec2::new(100.0, 100.0));

    // Cursor right and up the screen
    let (x, y) = tracker.offset(Vec2::new(110.0, 95.0));
    assert_eq!(x, 10.0);
    assert_eq!(y, 5.0);

    let (x, y) = tracker.offset(Vec2::new(100.0, 105.0));
    assert_eq!(x, -10.0);
    assert_eq!(y, -10.0);
}

#[test]
fn test_reset_reprimes() {
    let mut tracker = MouseTracker::with_position(Vec2::ZERO);
    tracker.reset();
    assert_eq!(tracker.offset(Vec2::new(500.0, 500.0)), (0.0, 0.0));
}

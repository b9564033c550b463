use bevy::prelude::*;

use super::segment::segment_for_angle;
use crate::engine::assets::viewer_settings::RotationSettings;

/// Who drives the rotation angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// Angle advances by a fixed step every tick. Initial mode.
    #[default]
    AutoRotate,
    /// Angle follows horizontal pointer travel.
    Dragging,
    /// Angle frozen until the next press.
    Idle,
}

/// Receiver of segment changes, e.g. the page's container pairs.
pub trait SegmentVisibility {
    /// Deactivate every indicator pair, then activate the pair for `active`.
    /// `None` hides everything.
    fn on_segment_changed(&mut self, active: Option<usize>);
}

/// Rotation and segment state for the viewer.
///
/// Auto-rotation loops forever and keeps every indicator hidden. The first
/// press hands control to the user for good: from then on the angle only
/// moves while dragging and the facing segment is always shown.
#[derive(Resource, Debug, Clone)]
pub struct RotationSegmentController {
    settings: RotationSettings,
    current_angle: f64,
    mode: RotationMode,
    last_pointer_x: f64,
    current_segment: usize,
    previous_segment: Option<usize>,
}

impl RotationSegmentController {
    pub fn new(settings: RotationSettings) -> Self {
        debug_assert!(settings.total_segments > 0, "segment count must be positive");
        Self {
            settings,
            current_angle: 0.0,
            mode: RotationMode::AutoRotate,
            last_pointer_x: 0.0,
            current_segment: 0,
            previous_segment: None,
        }
    }

    /// Unwrapped rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.current_angle
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn last_pointer_x(&self) -> f64 {
        self.last_pointer_x
    }

    pub fn current_segment(&self) -> usize {
        self.current_segment
    }

    pub fn previous_segment(&self) -> Option<usize> {
        self.previous_segment
    }

    /// Advance one frame and return the angle to render with.
    /// `visibility` is only called when the facing segment changes.
    pub fn tick<V: SegmentVisibility + ?Sized>(&mut self, visibility: &mut V) -> f64 {
        if self.mode == RotationMode::AutoRotate {
            self.current_angle += self.settings.rotation_speed;
            if self.current_angle >= self.settings.total_rotation {
                self.current_angle = 0.0;
                debug!("Auto-rotation completed a full turn");
            }
        }

        self.current_segment = segment_for_angle(self.current_angle, self.settings.total_segments);

        if self.previous_segment != Some(self.current_segment) {
            debug!(
                "Segment {:?} -> {} ({:?})",
                self.previous_segment, self.current_segment, self.mode
            );
            self.notify(visibility);
            self.previous_segment = Some(self.current_segment);
        }

        self.current_angle
    }

    /// Press: start dragging from `x` and show the facing segment right away.
    pub fn pointer_down<V: SegmentVisibility + ?Sized>(&mut self, x: f64, visibility: &mut V) {
        if self.mode != RotationMode::Dragging {
            debug!("Rotation mode {:?} -> Dragging", self.mode);
        }
        self.mode = RotationMode::Dragging;
        self.last_pointer_x = x;
        self.notify(visibility);
    }

    /// Move: rotate by the horizontal travel since the last pointer event.
    pub fn pointer_move(&mut self, x: f64) {
        if self.mode != RotationMode::Dragging {
            return;
        }
        self.current_angle += (x - self.last_pointer_x) * self.settings.drag_sensitivity;
        self.last_pointer_x = x;
    }

    /// Release: freeze the angle. Releases outside a drag are ignored.
    pub fn pointer_up(&mut self) {
        if self.mode == RotationMode::Dragging {
            debug!("Rotation mode Dragging -> Idle");
            self.mode = RotationMode::Idle;
        }
    }

    fn notify<V: SegmentVisibility + ?Sized>(&self, visibility: &mut V) {
        let suppressed = self.mode == RotationMode::AutoRotate;
        visibility.on_segment_changed((!suppressed).then_some(self.current_segment));
    }
}

impl Default for RotationSegmentController {
    fn default() -> Self {
        Self::new(RotationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rotation::segment::{normalize_angle, segment_angle};
    use std::f64::consts::TAU;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Option<usize>>,
    }

    impl SegmentVisibility for Recorder {
        fn on_segment_changed(&mut self, active: Option<usize>) {
            self.calls.push(active);
        }
    }

    /// Drag from 0 to `pixels`, release, and settle with one tick.
    fn drag_to_idle(controller: &mut RotationSegmentController, pixels: f64) -> Recorder {
        let mut recorder = Recorder::default();
        controller.pointer_down(0.0, &mut recorder);
        controller.pointer_move(pixels);
        controller.pointer_up();
        controller.tick(&mut recorder);
        recorder
    }

    #[test]
    fn test_starts_in_auto_rotate_with_hidden_indicators() {
        let mut controller = RotationSegmentController::default();
        let mut recorder = Recorder::default();

        let angle = controller.tick(&mut recorder);

        assert_eq!(controller.mode(), RotationMode::AutoRotate);
        assert!((angle - 0.003).abs() < 1e-12);
        assert_eq!(controller.current_segment(), 0);
        assert_eq!(controller.previous_segment(), Some(0));
        assert_eq!(recorder.calls, vec![None]);
    }

    #[test]
    fn test_notifies_only_on_segment_change() {
        let mut controller = RotationSegmentController::default();
        let mut recorder = Recorder::default();

        // 0.6283 / 0.003 ≈ 209.4 ticks per segment.
        for _ in 0..200 {
            controller.tick(&mut recorder);
        }
        assert_eq!(recorder.calls.len(), 1);

        for _ in 0..20 {
            controller.tick(&mut recorder);
        }
        assert_eq!(controller.current_segment(), 1);
        assert_eq!(recorder.calls, vec![None, None]);
    }

    #[test]
    fn test_auto_rotate_wraps_after_full_turn() {
        let mut controller = RotationSegmentController::default();
        let mut recorder = Recorder::default();

        for _ in 0..2094 {
            controller.tick(&mut recorder);
        }
        assert!(controller.angle() < TAU);
        assert!(controller.angle() > 6.28);
        assert_eq!(controller.current_segment(), 9);

        let angle = controller.tick(&mut recorder);
        assert_eq!(angle, 0.0);
        assert_eq!(controller.current_segment(), 0);

        // Auto-rotation keeps going after the wrap.
        assert_eq!(controller.mode(), RotationMode::AutoRotate);
        controller.tick(&mut recorder);
        assert!(controller.angle() > 0.0);

        // Ten segment changes plus the wrap back to 0, all suppressed.
        assert_eq!(recorder.calls.len(), 11);
        assert!(recorder.calls.iter().all(Option::is_none));
    }

    #[test]
    fn test_press_shows_current_segment_immediately() {
        let mut controller = RotationSegmentController::default();
        let mut recorder = Recorder::default();
        for _ in 0..500 {
            controller.tick(&mut recorder);
        }
        assert_eq!(controller.current_segment(), 2);
        recorder.calls.clear();

        controller.pointer_down(42.0, &mut recorder);

        assert_eq!(controller.mode(), RotationMode::Dragging);
        assert_eq!(controller.last_pointer_x(), 42.0);
        assert_eq!(recorder.calls, vec![Some(2)]);
    }

    #[test]
    fn test_drag_from_idle_rotates_by_pointer_delta() {
        let mut controller = RotationSegmentController::default();
        // 440 px * 0.005 = 2.2 rad, the middle of segment 3.
        drag_to_idle(&mut controller, 440.0);
        assert_eq!(controller.mode(), RotationMode::Idle);
        assert_eq!(controller.current_segment(), 3);
        let start = controller.angle();

        let mut recorder = Recorder::default();
        controller.pointer_down(100.0, &mut recorder);
        assert_eq!(controller.mode(), RotationMode::Dragging);
        assert_eq!(controller.last_pointer_x(), 100.0);
        assert_eq!(recorder.calls, vec![Some(3)]);

        controller.pointer_move(150.0);
        assert!((controller.angle() - (start + 0.25)).abs() < 1e-12);
        assert_eq!(controller.last_pointer_x(), 150.0);

        controller.tick(&mut recorder);
        // 2.45 rad sits in segment 3 still; no extra notification.
        assert_eq!(controller.current_segment(), 3);
        assert_eq!(recorder.calls.len(), 1);

        controller.pointer_move(250.0);
        controller.tick(&mut recorder);
        assert_eq!(controller.current_segment(), 4);
        assert_eq!(recorder.calls, vec![Some(3), Some(4)]);
    }

    #[test]
    fn test_idle_angle_is_frozen() {
        let mut controller = RotationSegmentController::default();
        drag_to_idle(&mut controller, 300.0);
        let frozen = controller.angle();

        let mut recorder = Recorder::default();
        for _ in 0..100 {
            controller.tick(&mut recorder);
        }
        controller.pointer_move(900.0);

        assert_eq!(controller.angle(), frozen);
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_drag_left_wraps_to_last_segment() {
        let mut controller = RotationSegmentController::default();
        let mut recorder = Recorder::default();
        controller.tick(&mut recorder);

        controller.pointer_down(500.0, &mut recorder);
        controller.pointer_move(400.0);
        controller.tick(&mut recorder);

        assert!(controller.angle() < 0.0);
        assert_eq!(controller.current_segment(), 9);
        assert_eq!(recorder.calls, vec![None, Some(0), Some(9)]);
    }

    #[test]
    fn test_each_move_delta_applies_once() {
        let mut controller = RotationSegmentController::default();
        let mut recorder = Recorder::default();
        controller.pointer_down(0.0, &mut recorder);

        controller.pointer_move(10.0);
        controller.tick(&mut recorder);
        controller.tick(&mut recorder);
        controller.pointer_move(30.0);

        assert!((controller.angle() - 30.0 * 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_release_without_press_keeps_auto_rotating() {
        let mut controller = RotationSegmentController::default();
        controller.pointer_up();
        assert_eq!(controller.mode(), RotationMode::AutoRotate);
    }

    #[test]
    fn test_segment_invariant_holds_after_every_tick() {
        let mut controller = RotationSegmentController::default();
        let mut recorder = Recorder::default();
        let width = segment_angle(10);

        for step in 0..3000 {
            if step == 1000 {
                controller.pointer_down(0.0, &mut recorder);
            }
            if step > 1000 {
                controller.pointer_move((step - 1000) as f64 * -3.0);
            }
            controller.tick(&mut recorder);

            let expected = (normalize_angle(controller.angle()) / width).floor() as usize % 10;
            assert_eq!(controller.current_segment(), expected);
        }
    }
}

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::rotation::controller::RotationSegmentController;
use crate::engine::visibility::SegmentChanged;

/// Pointer state carried between frames.
#[derive(Resource, Default, Debug)]
pub struct PointerTracker {
    /// Touch that started the current touch drag; other fingers are ignored.
    pub primary_touch: Option<u64>,
}

/// Mouse: any button press starts a drag at the cursor, movement drags, release stops.
pub fn mouse_pointer_input(
    mut controller: ResMut<RotationSegmentController>,
    mut segment_events: EventWriter<SegmentChanged>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    for cursor in cursor_moved.read() {
        controller.pointer_move(cursor.position.x as f64);
    }

    if mouse_button.get_just_pressed().next().is_some() {
        // A press outside the window has no position to drag from.
        let cursor = windows.single().ok().and_then(Window::cursor_position);
        if let Some(cursor) = cursor {
            controller.pointer_down(cursor.x as f64, &mut segment_events);
        }
    }

    if mouse_button.get_just_released().next().is_some() {
        controller.pointer_up();
    }
}

/// Touch: the first finger down drives the drag until it lifts.
pub fn touch_pointer_input(
    mut controller: ResMut<RotationSegmentController>,
    mut segment_events: EventWriter<SegmentChanged>,
    mut tracker: ResMut<PointerTracker>,
    mut touch_events: EventReader<TouchInput>,
) {
    for touch in touch_events.read() {
        let x = touch.position.x as f64;
        match touch.phase {
            TouchPhase::Started if tracker.primary_touch.is_none() => {
                tracker.primary_touch = Some(touch.id);
                controller.pointer_down(x, &mut segment_events);
            }
            TouchPhase::Moved if tracker.primary_touch == Some(touch.id) => {
                controller.pointer_move(x);
            }
            TouchPhase::Ended | TouchPhase::Canceled
                if tracker.primary_touch == Some(touch.id) =>
            {
                tracker.primary_touch = None;
                controller.pointer_up();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rotation::controller::RotationMode;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<SegmentChanged>()
            .add_event::<CursorMoved>()
            .add_event::<TouchInput>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<PointerTracker>()
            .init_resource::<RotationSegmentController>()
            .add_systems(Update, (mouse_pointer_input, touch_pointer_input));
        app
    }

    fn spawn_window(app: &mut App) -> Entity {
        app.world_mut().spawn((Window::default(), PrimaryWindow)).id()
    }

    fn set_window_cursor(app: &mut App, x: Option<f32>) {
        let mut windows = app
            .world_mut()
            .query_filtered::<&mut Window, With<PrimaryWindow>>();
        for mut window in windows.iter_mut(app.world_mut()) {
            window.set_cursor_position(x.map(|x| Vec2::new(x, 10.0)));
        }
    }

    fn move_cursor(app: &mut App, x: f32) {
        set_window_cursor(app, Some(x));
        app.world_mut().send_event(CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(x, 10.0),
            delta: None,
        });
    }

    fn touch(app: &mut App, id: u64, phase: TouchPhase, x: f32) {
        app.world_mut().send_event(TouchInput {
            phase,
            position: Vec2::new(x, 10.0),
            window: Entity::PLACEHOLDER,
            force: None,
            id,
        });
    }

    fn set_button(app: &mut App, pressed: bool) {
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.clear();
        if pressed {
            buttons.press(MouseButton::Left);
        } else {
            buttons.release(MouseButton::Left);
        }
    }

    fn controller(app: &App) -> &RotationSegmentController {
        app.world().resource::<RotationSegmentController>()
    }

    #[test]
    fn test_mouse_drag_rotates_by_horizontal_travel() {
        let mut app = test_app();
        spawn_window(&mut app);
        move_cursor(&mut app, 100.0);
        app.update();
        // Hovering does not rotate outside a drag.
        assert_eq!(controller(&app).angle(), 0.0);

        set_button(&mut app, true);
        app.update();
        assert_eq!(controller(&app).mode(), RotationMode::Dragging);
        assert_eq!(controller(&app).last_pointer_x(), 100.0);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
        move_cursor(&mut app, 150.0);
        app.update();
        assert!((controller(&app).angle() - 0.25).abs() < 1e-9);

        set_button(&mut app, false);
        app.update();
        assert_eq!(controller(&app).mode(), RotationMode::Idle);
    }

    #[test]
    fn test_press_without_prior_cursor_event_uses_window_position() {
        let mut app = test_app();
        spawn_window(&mut app);
        // The cursor is already over the window but no CursorMoved was read.
        set_window_cursor(&mut app, Some(800.0));
        set_button(&mut app, true);
        app.update();
        assert_eq!(controller(&app).mode(), RotationMode::Dragging);
        assert_eq!(controller(&app).last_pointer_x(), 800.0);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
        move_cursor(&mut app, 801.0);
        app.update();
        assert!((controller(&app).angle() - 0.005).abs() < 1e-9);
    }

    #[test]
    fn test_press_without_cursor_position_is_ignored() {
        let mut app = test_app();
        spawn_window(&mut app);
        set_window_cursor(&mut app, None);
        set_button(&mut app, true);
        app.update();

        assert_eq!(controller(&app).mode(), RotationMode::AutoRotate);
        assert!(
            app.world()
                .resource::<Events<SegmentChanged>>()
                .is_empty()
        );
    }

    #[test]
    fn test_press_emits_visible_segment() {
        let mut app = test_app();
        spawn_window(&mut app);
        set_window_cursor(&mut app, Some(400.0));
        set_button(&mut app, true);
        app.update();

        let events: Vec<_> = app
            .world()
            .resource::<Events<SegmentChanged>>()
            .iter_current_update_events()
            .copied()
            .collect();
        assert_eq!(events, vec![SegmentChanged { active: Some(0) }]);
    }

    #[test]
    fn test_touch_follows_first_finger_only() {
        let mut app = test_app();
        touch(&mut app, 7, TouchPhase::Started, 200.0);
        touch(&mut app, 8, TouchPhase::Started, 900.0);
        app.update();
        assert_eq!(controller(&app).mode(), RotationMode::Dragging);
        assert_eq!(controller(&app).last_pointer_x(), 200.0);

        touch(&mut app, 8, TouchPhase::Moved, 1000.0);
        touch(&mut app, 7, TouchPhase::Moved, 180.0);
        app.update();
        assert!((controller(&app).angle() + 0.1).abs() < 1e-9);

        touch(&mut app, 8, TouchPhase::Ended, 1000.0);
        app.update();
        assert_eq!(controller(&app).mode(), RotationMode::Dragging);

        touch(&mut app, 7, TouchPhase::Ended, 180.0);
        app.update();
        assert_eq!(controller(&app).mode(), RotationMode::Idle);
        assert_eq!(app.world().resource::<PointerTracker>().primary_touch, None);
    }
}

use super::*;
use crate::core::PointerEventKind;
use glam::Vec2;

#[test]
fn pointer_intents_become_raw_events() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(3.0, 4.0),
            buttons: 1,
        },
    );
    match commands.as_slice() {
        [AppCommand::RoutePointer { event }] => {
            assert_eq!(event.kind, PointerEventKind::Down);
            assert_eq!(event.position, Vec2::new(3.0, 4.0));
            assert_eq!(event.buttons, 1);
        }
        other => panic!("unerwartete Commands: {:?}", other),
    }
}

#[test]
fn frame_started_without_hover_only_ticks() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::FrameStarted { hover_pos: None });
    assert_eq!(commands, vec![AppCommand::TickHandles]);
}

#[test]
fn frame_started_refreshes_before_tick() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::FrameStarted {
            hover_pos: Some(Vec2::ONE),
        },
    );
    assert_eq!(
        commands,
        vec![
            AppCommand::RefreshPointer {
                screen_pos: Vec2::ONE
            },
            AppCommand::TickHandles
        ]
    );
}

#[test]
fn unchanged_viewport_size_is_dropped() {
    let state = AppState::new();
    let size = state.view.viewport_size;
    assert!(map_intent_to_commands(&state, AppIntent::ViewportResized { size }).is_empty());
}

#[test]
fn reset_key_press_records_key_then_resets() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::KeyChanged {
            key: KEY_RESET_HANDLES.to_string(),
            pressed: true,
        },
    );
    assert_eq!(
        commands,
        vec![
            AppCommand::SetKeyState {
                key: "R".to_string(),
                pressed: true
            },
            AppCommand::ResetHandles
        ]
    );
}

#[test]
fn held_reset_key_does_not_repeat() {
    let mut state = AppState::new();
    state.keyboard.set(KEY_RESET_HANDLES, true);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::KeyChanged {
            key: KEY_RESET_HANDLES.to_string(),
            pressed: true,
        },
    );
    assert_eq!(commands.len(), 1);
}

#[test]
fn escape_requests_exit_release_does_not() {
    let state = AppState::new();
    let press = map_intent_to_commands(
        &state,
        AppIntent::KeyChanged {
            key: KEY_EXIT.to_string(),
            pressed: true,
        },
    );
    assert!(press.contains(&AppCommand::RequestExit));

    let release = map_intent_to_commands(
        &state,
        AppIntent::KeyChanged {
            key: KEY_EXIT.to_string(),
            pressed: false,
        },
    );
    assert!(!release.contains(&AppCommand::RequestExit));
}

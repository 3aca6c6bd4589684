use crate::{AppCommand, AppError, HotkeyHandler, config::HotkeyConfig};

use global_hotkey::HotKeyState;
use tokio::sync::mpsc;

/// WHAT: A press is forwarded as a marker request
/// WHY: Pressing the hotkey is how users drop markers
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_pressed_state_when_handling_event_then_marker_requested() {
    // Given: A handler with an open channel
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let handler = HotkeyHandler::new(7, command_tx);

    // When: The hotkey is pressed
    handler
        .handle_hotkey_event(HotKeyState::Pressed)
        .await
        .unwrap();

    // Then: One marker request arrives
    assert_eq!(command_rx.recv().await, Some(AppCommand::MarkerRequested));
}

/// WHAT: A release is not forwarded
/// WHY: Only the press edge is actionable, or each tap would mark twice
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_released_state_when_handling_event_then_nothing_sent() {
    // Given: A handler with an open channel
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let handler = HotkeyHandler::new(7, command_tx);

    // When: The hotkey is released
    handler
        .handle_hotkey_event(HotKeyState::Released)
        .await
        .unwrap();
    drop(handler);

    // Then: The channel closes without a command
    assert_eq!(command_rx.recv().await, None);
}

/// WHAT: A closed command channel surfaces ChannelSendFailed
/// WHY: A dead app loop must be visible in the log
#[tokio::test]
async fn given_closed_channel_when_pressed_then_channel_send_failed() {
    // Given: A closed command channel
    let (command_tx, command_rx) = mpsc::channel(1);
    drop(command_rx);
    let handler = HotkeyHandler::new(7, command_tx);

    // When: The hotkey is pressed
    let result = handler.handle_hotkey_event(HotKeyState::Pressed).await;

    // Then: Send fails
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
}

/// WHAT: The default binding parses
/// WHY: A fresh install must register a hotkey without user input
#[test]
fn given_default_binding_when_parsing_then_hotkey_created() {
    let config = HotkeyConfig::default();

    assert!(config.hotkey().is_ok());
}

/// WHAT: Garbage bindings are rejected with a registration error
/// WHY: A hand-edited config should fail loudly at startup
#[test]
fn given_invalid_binding_when_parsing_then_registration_failed() {
    let config = HotkeyConfig {
        binding: "ctrl+shift+NotAKey".to_string(),
    };

    assert!(matches!(
        config.hotkey(),
        Err(AppError::HotkeyRegistrationFailed { .. })
    ));
}

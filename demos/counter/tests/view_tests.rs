//! Rendering and key handling of the counter view

use redux_counter::components::{Component, CounterView, CounterViewProps};
use redux_counter::config::{default_keybindings, AppConfig};
use redux_counter::{CounterAction, CounterState};
use tally::testing::{key_event, RenderHarness};
use tally::{assert_emitted, count_emitted, EventKind};

fn render(state: &CounterState) -> String {
    let keybindings = default_keybindings();
    let mut render = RenderHarness::new(160, 12);
    let mut view = CounterView;

    render.render_to_string_plain(|frame| {
        let area = frame.area();
        let props = CounterViewProps {
            state,
            keybindings: &keybindings,
        };
        view.render(frame, area, props);
    })
}

fn actions_for(event: &EventKind) -> Vec<CounterAction> {
    let keybindings = default_keybindings();
    let state = CounterState::default();
    let mut view = CounterView;
    let props = CounterViewProps {
        state: &state,
        keybindings: &keybindings,
    };
    view.handle_event(event, props).into_iter().collect()
}

#[test]
fn test_hidden_counter_shows_no_value() {
    let output = render(&CounterState::new(42, false));

    assert!(output.contains("Redux Counter"));
    assert!(!output.contains("42"));
    assert!(output.contains("Show-Counter"));
}

#[test]
fn test_visible_counter_shows_value() {
    let output = render(&CounterState::new(-9, true));

    assert!(output.contains("-9"));
    assert!(output.contains("Hide-Counter"));
    assert!(output.contains("Increase By 5"));
    assert!(output.contains("Decrease By 15"));
}

#[test]
fn test_keys_map_to_actions() {
    assert_emitted!(actions_for(&key_event("k")), CounterAction::Increment);
    assert_emitted!(actions_for(&key_event("down")), CounterAction::Decrement);
    assert_emitted!(actions_for(&key_event("5")), CounterAction::Increase(5));
    assert_emitted!(actions_for(&key_event("3")), CounterAction::Decrease(3));
    assert_emitted!(actions_for(&key_event("0")), CounterAction::Increase(10));
    assert_emitted!(actions_for(&key_event("1")), CounterAction::Decrease(15));
    assert_emitted!(actions_for(&key_event("r")), CounterAction::Reset);
    assert_emitted!(actions_for(&key_event("space")), CounterAction::ToggleVisibility);
    assert_emitted!(actions_for(&key_event("esc")), CounterAction::Quit);
}

#[test]
fn test_unbound_key_and_resize_emit_nothing() {
    assert_eq!(count_emitted!(actions_for(&key_event("x")), _), 0);
    assert!(actions_for(&EventKind::Resize(80, 24)).is_empty());
}

#[test]
fn test_rebound_key_from_config() {
    let config = AppConfig::from_json(r#"{"keybindings": {"reset": ["z"]}}"#).unwrap();
    let keybindings = config.keybindings();
    let state = CounterState::new(5, true);
    let mut view = CounterView;

    let props = CounterViewProps {
        state: &state,
        keybindings: &keybindings,
    };
    let actions: Vec<_> = view
        .handle_event(&key_event("z"), props)
        .into_iter()
        .collect();

    assert_eq!(actions, vec![CounterAction::Reset]);
}

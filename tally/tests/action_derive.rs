//! Tests for #[derive(Action)]

use tally::Action;

#[derive(Action, Clone, Debug)]
enum Plain {
    Start,
    Load(u32),
    Move { dx: i32, dy: i32 },
}

#[derive(Action, Clone, Debug)]
#[action(rename_all = "snake_case")]
enum Wire {
    Increment,
    Increase(i64),
    #[action(rename = "toggle_counter")]
    ToggleVisibility,
    Unknown(String),
}

#[derive(Action, Clone, Debug)]
#[action(rename_all = "kebab-case")]
enum Kebab {
    OpenPanel,
}

#[test]
fn test_default_names_are_variant_idents() {
    assert_eq!(Plain::Start.name(), "Start");
    assert_eq!(Plain::Load(3).name(), "Load");
    assert_eq!(Plain::Move { dx: 1, dy: -1 }.name(), "Move");
}

#[test]
fn test_rename_all_snake_case() {
    assert_eq!(Wire::Increment.name(), "increment");
    assert_eq!(Wire::Increase(5).name(), "increase");
    assert_eq!(Wire::Unknown("x".into()).name(), "unknown");
}

#[test]
fn test_variant_rename_wins() {
    assert_eq!(Wire::ToggleVisibility.name(), "toggle_counter");
}

#[test]
fn test_rename_all_kebab_case() {
    assert_eq!(Kebab::OpenPanel.name(), "open-panel");
}

//! Transition function - how state changes
//!
//! Pure: the next state depends only on the current state and the action.
//! Arithmetic wraps on overflow, so every value stays a valid `i64` and an
//! `Increase(a)` followed by `Decrease(a)` always restores the original.

use crate::action::CounterAction;
use crate::state::CounterState;

pub fn transition(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => CounterState {
            counter: state.counter.wrapping_add(1),
            ..*state
        },
        CounterAction::Decrement => CounterState {
            counter: state.counter.wrapping_sub(1),
            ..*state
        },
        CounterAction::Reset => CounterState {
            counter: 0,
            ..*state
        },
        CounterAction::Increase(amount) => CounterState {
            counter: state.counter.wrapping_add(*amount),
            ..*state
        },
        CounterAction::Decrease(amount) => CounterState {
            counter: state.counter.wrapping_sub(*amount),
            ..*state
        },
        CounterAction::ToggleVisibility => CounterState {
            show_counter: !state.show_counter,
            ..*state
        },
        CounterAction::Unknown(_) | CounterAction::Quit => *state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn apply(state: CounterState, actions: &[CounterAction]) -> CounterState {
        actions.iter().fold(state, |s, a| transition(&s, a))
    }

    #[test]
    fn test_increment_and_decrement() {
        let state = CounterState::default();
        assert_eq!(transition(&state, &CounterAction::Increment).counter, 1);
        assert_eq!(transition(&state, &CounterAction::Decrement).counter, -1);
    }

    #[test]
    fn test_reset_keeps_visibility() {
        let state = CounterState::new(-42, true);
        assert_eq!(
            transition(&state, &CounterAction::Reset),
            CounterState::new(0, true)
        );
    }

    #[test]
    fn test_unknown_and_quit_are_noops() {
        let state = CounterState::new(7, true);
        assert_eq!(transition(&state, &CounterAction::Unknown("jump".into())), state);
        assert_eq!(transition(&state, &CounterAction::Quit), state);
    }

    #[test]
    fn test_overflow_wraps() {
        let state = CounterState::new(i64::MAX, false);
        let next = transition(&state, &CounterAction::Increment);
        assert_eq!(next.counter, i64::MIN);
        assert_eq!(transition(&next, &CounterAction::Decrement), state);
    }

    #[test]
    fn test_demo_scenario() {
        let steps = [
            (CounterAction::Increment, CounterState::new(1, false)),
            (CounterAction::Increase(5), CounterState::new(6, false)),
            (CounterAction::Decrease(15), CounterState::new(-9, false)),
            (CounterAction::ToggleVisibility, CounterState::new(-9, true)),
            (CounterAction::Reset, CounterState::new(0, true)),
        ];

        let mut state = CounterState::default();
        for (action, expected) in steps {
            state = transition(&state, &action);
            assert_eq!(state, expected, "after {action:?}");
        }
    }

    fn arb_state() -> impl Strategy<Value = CounterState> {
        (any::<i64>(), any::<bool>()).prop_map(|(c, s)| CounterState::new(c, s))
    }

    proptest! {
        #[test]
        fn prop_steps_sum_algebraically(
            start in -1_000_000i64..1_000_000,
            ups in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let actions: Vec<_> = ups
                .iter()
                .map(|up| if *up { CounterAction::Increment } else { CounterAction::Decrement })
                .collect();
            let expected = start + ups.iter().map(|up| if *up { 1 } else { -1 }).sum::<i64>();

            let end = apply(CounterState::new(start, false), &actions);
            prop_assert_eq!(end.counter, expected);
            prop_assert!(!end.show_counter);
        }

        #[test]
        fn prop_reset_zeroes_counter_only(state in arb_state()) {
            let next = transition(&state, &CounterAction::Reset);
            prop_assert_eq!(next.counter, 0);
            prop_assert_eq!(next.show_counter, state.show_counter);
        }

        #[test]
        fn prop_toggle_is_involution(state in arb_state()) {
            let twice = apply(state, &[CounterAction::ToggleVisibility, CounterAction::ToggleVisibility]);
            prop_assert_eq!(twice, state);
        }

        #[test]
        fn prop_increase_then_decrease_round_trips(state in arb_state(), amount in any::<i64>()) {
            let back = apply(state, &[CounterAction::Increase(amount), CounterAction::Decrease(amount)]);
            prop_assert_eq!(back, state);
        }

        #[test]
        fn prop_unknown_leaves_state(state in arb_state(), kind in "[a-z_]{1,12}") {
            prop_assert_eq!(transition(&state, &CounterAction::Unknown(kind)), state);
        }
    }
}

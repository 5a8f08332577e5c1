//! Action messages - the untyped shape actions arrive in from outside
//!
//! A message is `{"type": "...", "payload": ...}`. Decoding into
//! [`CounterAction`] is where loose input becomes a typed action:
//!
//! - unrecognized `type` values decode to [`CounterAction::Unknown`]
//! - a missing or `null` payload on `increase`/`decrease` means 0
//! - a payload that is not an integer in `i64` range is rejected
//! - payloads on other kinds are ignored

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::action::CounterAction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionMessage {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ActionMessage {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload.into()),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("`{kind}` payload must be an integer, got {payload}")]
    InvalidPayload { kind: String, payload: Value },
}

impl TryFrom<ActionMessage> for CounterAction {
    type Error = DecodeError;

    fn try_from(message: ActionMessage) -> Result<Self, Self::Error> {
        let action = match message.kind.as_str() {
            "increment" => CounterAction::Increment,
            "decrement" => CounterAction::Decrement,
            "reset" => CounterAction::Reset,
            "increase" => CounterAction::Increase(amount(&message)?),
            "decrease" => CounterAction::Decrease(amount(&message)?),
            "toggle_counter" => CounterAction::ToggleVisibility,
            "quit" => CounterAction::Quit,
            _ => CounterAction::Unknown(message.kind),
        };
        Ok(action)
    }
}

fn amount(message: &ActionMessage) -> Result<i64, DecodeError> {
    match &message.payload {
        None | Some(Value::Null) => {
            warn!(kind = %message.kind, "Missing payload, using 0");
            Ok(0)
        }
        Some(value) => value.as_i64().ok_or_else(|| DecodeError::InvalidPayload {
            kind: message.kind.clone(),
            payload: value.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<CounterAction, DecodeError> {
        let message: ActionMessage = serde_json::from_value(value).unwrap();
        CounterAction::try_from(message)
    }

    #[test]
    fn test_decode_known_kinds() {
        assert_eq!(decode(json!({"type": "increment"})), Ok(CounterAction::Increment));
        assert_eq!(decode(json!({"type": "decrement"})), Ok(CounterAction::Decrement));
        assert_eq!(decode(json!({"type": "reset"})), Ok(CounterAction::Reset));
        assert_eq!(
            decode(json!({"type": "increase", "payload": 5})),
            Ok(CounterAction::Increase(5))
        );
        assert_eq!(
            decode(json!({"type": "decrease", "payload": -15})),
            Ok(CounterAction::Decrease(-15))
        );
        assert_eq!(
            decode(json!({"type": "toggle_counter"})),
            Ok(CounterAction::ToggleVisibility)
        );
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        assert_eq!(
            decode(json!({"type": "jump", "payload": 3})),
            Ok(CounterAction::Unknown("jump".into()))
        );
    }

    #[test]
    fn test_missing_payload_defaults_to_zero() {
        assert_eq!(decode(json!({"type": "increase"})), Ok(CounterAction::Increase(0)));
        assert_eq!(
            decode(json!({"type": "decrease", "payload": null})),
            Ok(CounterAction::Decrease(0))
        );
    }

    #[test]
    fn test_non_integer_payload_is_rejected() {
        for payload in [json!("5"), json!(1.5), json!(true), json!(u64::MAX), json!([1])] {
            let err = decode(json!({"type": "increase", "payload": payload})).unwrap_err();
            assert!(matches!(err, DecodeError::InvalidPayload { ref kind, .. } if kind == "increase"));
        }
    }

    #[test]
    fn test_payload_ignored_on_other_kinds() {
        assert_eq!(
            decode(json!({"type": "reset", "payload": "anything"})),
            Ok(CounterAction::Reset)
        );
    }

    #[test]
    fn test_decoded_name_matches_type() {
        for kind in ["increment", "decrement", "reset", "increase", "decrease", "toggle_counter"] {
            let action = CounterAction::try_from(ActionMessage::with_payload(kind, 1)).unwrap();
            assert_eq!(tally::Action::name(&action), kind);
        }
    }

    #[test]
    fn test_serialize_shape() {
        assert_eq!(
            serde_json::to_value(ActionMessage::new("reset")).unwrap(),
            json!({"type": "reset"})
        );
    }
}

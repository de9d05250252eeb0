use std::io;

use karbon_core::contracts::envelope::error_contract;
use karbon_core::{CoreError, SuccessEnvelope};
use serde::Serialize;
use serde_json::json;

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let payload = json!({
        "ok": true,
        "version": JSON_VERSION,
        "command": success.command,
        "data": success.data,
    });
    serialize_json_pretty(&payload)
}

pub fn render_error_json(error: &CoreError) -> io::Result<String> {
    let payload = json!({ "error": error_contract(error) });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use karbon_core::{CoreError, SuccessEnvelope};
    use serde_json::{Value, json};

    use super::{render_error_json, render_success_json};

    #[test]
    fn success_json_wraps_data_in_a_versioned_envelope() {
        let payload = SuccessEnvelope {
            ok: true,
            command: "rewards".to_string(),
            version: "0.1.0".to_string(),
            data: json!({"rewards": []}),
        };

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert!(value["data"]["rewards"].is_array());
            }
        }
    }

    #[test]
    fn error_json_uses_universal_shape() {
        let error = CoreError::new("unknown_reward", "missing", vec!["run rewards".to_string()]);
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("unknown_reward".to_string())
                );
                assert!(value.get("ok").is_none());
                assert!(value["error"].get("data").is_none());
            }
        }
    }

    #[test]
    fn error_json_carries_structured_data_when_present() {
        let error = CoreError::insufficient_coins(30, 4);
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["error"]["data"]["needed"], Value::from(30));
                assert_eq!(value["error"]["data"]["balance"], Value::from(4));
            }
        }
    }
}

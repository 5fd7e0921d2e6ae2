//! Air-quality response models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current air quality as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentAirQuality {
    /// Timezone resolved by the provider (`timezone=auto`)
    pub timezone: Option<String>,
    /// The `current` block, untouched; empty when the provider omitted it
    pub values: Map<String, Value>,
}

impl TryFrom<Value> for CurrentAirQuality {
    type Error = String;

    /// Accepts only a non-empty object whose `current` entry, when present,
    /// is itself an object.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut body) = body else {
            return Err(format!("expected a JSON object, got {}", kind(&body)));
        };
        if body.is_empty() {
            return Err("empty response object".to_string());
        }

        let timezone = body
            .get("timezone")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let values = match body.remove("current") {
            None => Map::new(),
            Some(Value::Object(current)) => current,
            Some(other) => {
                return Err(format!("`current` must be an object, got {}", kind(&other)));
            },
        };

        Ok(Self { timezone, values })
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_current_block() {
        let body = json!({
            "latitude": 28.625,
            "longitude": 77.25,
            "timezone": "Asia/Kolkata",
            "current_units": {"us_aqi": "USAQI"},
            "current": {"time": "2024-11-10T14:00", "interval": 3600, "us_aqi": 312, "pm2_5": 180.4}
        });
        let current = CurrentAirQuality::try_from(body).expect("should parse");
        assert_eq!(current.timezone.as_deref(), Some("Asia/Kolkata"));
        assert_eq!(current.values.get("us_aqi").and_then(Value::as_u64), Some(312));
    }

    #[test]
    fn missing_current_block_becomes_empty() {
        let current = CurrentAirQuality::try_from(json!({"latitude": 28.6}))
            .expect("should parse");
        assert!(current.values.is_empty());
        assert!(current.timezone.is_none());
    }

    #[test]
    fn rejects_empty_or_non_object_bodies() {
        for body in [json!({}), json!([]), json!([{"current": {}}]), json!(null), json!("ok")] {
            assert!(
                CurrentAirQuality::try_from(body.clone()).is_err(),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_object_current_block() {
        let err = CurrentAirQuality::try_from(json!({"current": null})).unwrap_err();
        assert!(err.contains("null"), "{err}");

        let err = CurrentAirQuality::try_from(json!({"current": [1, 2]})).unwrap_err();
        assert!(err.contains("array"), "{err}");
    }
}

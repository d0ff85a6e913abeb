//! Manual evaluation payloads
//!
//! `/manual` accepts loosely typed JSON: every field is optional, numbers
//! may arrive as strings or booleans, and request/QPS counts are truncated
//! to integers.

use crate::error::{ApiError, Result};
use dashboard_lib::{MetricReadings, Provider};
use serde_json::{Map, Value};

/// Coerced body of a manual evaluation request
#[derive(Debug, Clone, PartialEq)]
pub struct ManualPayload {
    /// Provider name exactly as sent, resolved later during evaluation
    pub provider: String,
    pub readings: MetricReadings,
}

impl Default for ManualPayload {
    fn default() -> Self {
        Self {
            provider: Provider::default().as_str().to_string(),
            readings: MetricReadings::default(),
        }
    }
}

impl ManualPayload {
    /// Parse a raw request body; an empty body or `null` means `{}`
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {}", e)))?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(object) => Self::from_object(&object),
            _ => Err(ApiError::BadRequest(
                "request body must be a JSON object".to_string(),
            )),
        }
    }

    pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let provider = match object.get("provider") {
            None => Provider::default().as_str().to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(_) => {
                return Err(ApiError::BadRequest(
                    "field 'provider' must be a string".to_string(),
                ))
            }
        };

        let readings = MetricReadings {
            cpu: float_field(object, "cpu")?,
            mem: float_field(object, "mem")?,
            disk: float_field(object, "disk")?,
            network: float_field(object, "network")?,
            db_latency: float_field(object, "db_latency")?,
            requests: int_field(object, "requests")?,
            request_rate: float_field(object, "request_rate")?,
            failure_rate: float_field(object, "failure_rate")?,
            qps: int_field(object, "qps")?,
            latency: float_field(object, "latency")?,
        };

        Ok(Self { provider, readings })
    }
}

fn invalid(field: &str, expected: &str, value: &Value) -> ApiError {
    ApiError::BadRequest(format!(
        "field '{}' must be {}, got {}",
        field, expected, value
    ))
}

fn float_field(object: &Map<String, Value>, field: &str) -> Result<f64> {
    let Some(value) = object.get(field) else {
        return Ok(0.0);
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(field, "a finite number", value))
}

fn int_field(object: &Map<String, Value>, field: &str) -> Result<i64> {
    let Some(value) = object.get(field) else {
        return Ok(0);
    };

    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };

    parsed.ok_or_else(|| invalid(field, "an integer", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_defaults_everything() {
        let bodies: [&[u8]; 4] = [b"", b"   \n", b"null", b"{}"];
        for body in bodies {
            let payload = ManualPayload::from_body(body).unwrap();
            assert_eq!(payload, ManualPayload::default());
            assert_eq!(payload.provider, "aws");
        }
    }

    #[test]
    fn test_numbers_are_coerced() {
        let payload = ManualPayload::from_body(
            br#"{"provider":"GCP","cpu":"85.5","mem":true,"qps":"2100","requests":1300.9,"latency":210}"#,
        )
        .unwrap();

        assert_eq!(payload.provider, "GCP");
        assert_eq!(payload.readings.cpu, 85.5);
        assert_eq!(payload.readings.mem, 1.0);
        assert_eq!(payload.readings.qps, 2100);
        assert_eq!(payload.readings.requests, 1300);
        assert_eq!(payload.readings.latency, 210.0);
        assert_eq!(payload.readings.disk, 0.0);
    }

    #[test]
    fn test_fractional_string_is_not_an_integer() {
        let err = ManualPayload::from_body(br#"{"requests":"12.5"}"#).unwrap_err();
        assert!(err.to_string().contains("requests"));
    }

    #[test]
    fn test_garbage_values_are_rejected() {
        assert!(ManualPayload::from_body(br#"{"cpu":"abc"}"#).is_err());
        assert!(ManualPayload::from_body(br#"{"cpu":null}"#).is_err());
        assert!(ManualPayload::from_body(br#"{"cpu":"inf"}"#).is_err());
        assert!(ManualPayload::from_body(br#"{"provider":7}"#).is_err());
        assert!(ManualPayload::from_body(b"[1,2]").is_err());
        assert!(ManualPayload::from_body(b"{not json").is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = ManualPayload::from_body(br#"{"cpu":10,"colour":"blue"}"#).unwrap();
        assert_eq!(payload.readings.cpu, 10.0);
    }
}

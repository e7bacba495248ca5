//! Value and default encodings.
//!
//! Data cells are JSON: strings as JSON strings, numbers as JSON numbers,
//! booleans as `1`/`0`, dates as epoch milliseconds and null as `null`.
//! Non-finite numbers have no JSON form and are written as the strings
//! `"NaN"`, `"inf"` and `"-inf"`.
//!
//! Default payloads are base64 of a plain-text rendering, tagged by kind.

use crate::base64;
use serde_json::Value as Json;
use sylph_core::schema::DefaultKind;
use sylph_core::{DataType, Value};

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Encodes a cell.
pub fn encode_value(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::String(s) => Json::String(s.clone()),
        Value::Number(n) => encode_number(*n),
        Value::Boolean(b) => Json::from(u8::from(*b)),
        Value::Date(ms) => Json::from(*ms),
    }
}

fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}

fn encode_number(n: f64) -> Json {
    if !n.is_finite() {
        Json::String(n.to_string())
    } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER && !is_negative_zero(n) {
        Json::from(n as i64)
    } else {
        Json::from(n)
    }
}

/// Decodes a cell of the given type. `None` if the JSON does not encode that type.
pub fn decode_value(json: &Json, data_type: DataType) -> Option<Value> {
    if json.is_null() {
        return Some(Value::Null);
    }
    match data_type {
        DataType::String => json.as_str().map(|s| Value::String(s.into())),
        DataType::Number => match json {
            Json::Number(n) => n.as_f64().map(Value::Number),
            Json::String(s) => parse_non_finite(s).map(Value::Number),
            _ => None,
        },
        DataType::Boolean => match json.as_u64() {
            Some(0) => Some(Value::Boolean(false)),
            Some(1) => Some(Value::Boolean(true)),
            _ => None,
        },
        DataType::Date => json.as_i64().map(Value::Date),
    }
}

fn parse_non_finite(s: &str) -> Option<f64> {
    match s {
        "NaN" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Encodes a default as `(kind tag, base64 payload)`.
pub fn encode_default(kind: &DefaultKind) -> (&'static str, String) {
    let text = match kind {
        DefaultKind::Literal(Value::Null) => String::new(),
        DefaultKind::Literal(Value::String(s)) => s.clone(),
        DefaultKind::Literal(Value::Number(n)) => n.to_string(),
        DefaultKind::Literal(Value::Boolean(b)) => String::from(if *b { "1" } else { "0" }),
        DefaultKind::Literal(Value::Date(ms)) => ms.to_string(),
        DefaultKind::RandomUuid | DefaultKind::CurrentTimestamp => String::new(),
        DefaultKind::Provider(name) => name.clone(),
    };
    (kind.tag(), base64::encode(text.as_bytes()))
}

/// Decodes a default from its kind tag and base64 payload.
pub fn decode_default(tag: &str, payload: &str) -> Result<DefaultKind, String> {
    let bytes = base64::decode(payload).map_err(|e| e.to_string())?;
    let text = String::from_utf8(bytes).map_err(|e| e.to_string())?;
    let invalid = || format!("invalid {} default payload {:?}", tag, text);

    let kind = match tag {
        "null" => DefaultKind::Literal(Value::Null),
        "uuid" => DefaultKind::RandomUuid,
        "timestamp" => DefaultKind::CurrentTimestamp,
        "provider" => DefaultKind::Provider(text),
        _ => {
            let data_type = DataType::from_tag(tag)
                .ok_or_else(|| format!("unknown default kind {:?}", tag))?;
            let value = match data_type {
                DataType::String => Value::String(text),
                DataType::Number => Value::Number(text.parse().map_err(|_| invalid())?),
                DataType::Boolean => match text.as_str() {
                    "1" => Value::Boolean(true),
                    "0" => Value::Boolean(false),
                    _ => return Err(invalid()),
                },
                DataType::Date => Value::Date(text.parse().map_err(|_| invalid())?),
            };
            DefaultKind::Literal(value)
        }
    };
    Ok(kind)
}

//! Lenient field decoders for rig payloads. A field of the wrong shape is
//! read as absent instead of failing the whole payload.

use crate::prelude::Rgb;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn channel(value: &Value) -> Option<u8> {
    number(value).map(|v| v.round().clamp(0.0, 255.0) as u8)
}

pub(crate) fn rgb(value: &Value) -> Option<Rgb> {
    match value {
        Value::Object(map) => Some(Rgb::new(
            channel(map.get("r")?)?,
            channel(map.get("g")?)?,
            channel(map.get("b")?)?,
        )),
        Value::Array(items) if items.len() == 3 => Some(Rgb::new(
            channel(&items[0])?,
            channel(&items[1])?,
            channel(&items[2])?,
        )),
        _ => None,
    }
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value))
}

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text(&value))
}

pub(crate) fn lenient_rgb<'de, D>(deserializer: D) -> Result<Option<Rgb>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(rgb(&value))
}

pub(crate) fn lenient_readings<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(number).collect(),
        _ => Vec::new(),
    })
}

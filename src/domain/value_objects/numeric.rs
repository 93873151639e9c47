//! Explicit coercion of loosely typed numeric input.
//!
//! HTML forms deliver prices and durations as text while JSON clients send
//! numbers. Both are accepted; anything else is rejected instead of being
//! silently turned into zero. Absent values default to zero.

use serde_json::Value;

/// Coerce a service price.
///
/// Accepts finite, non-negative JSON numbers and numeric strings.
pub fn coerce_price(value: Option<&Value>) -> Result<f64, String> {
    let price = match value {
        None | Some(Value::Null) => return Ok(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match price {
        Some(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(format!("price: expected a non-negative number, got {}", describe(value))),
    }
}

/// Coerce a service duration in whole minutes.
///
/// Accepts non-negative integral JSON numbers and integer strings.
pub fn coerce_duration(value: Option<&Value>) -> Result<i64, String> {
    let minutes = match value {
        None | Some(Value::Null) => return Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    match minutes {
        Some(m) if m >= 0 => Ok(m),
        _ => Err(format!(
            "duration: expected a non-negative whole number of minutes, got {}",
            describe(value)
        )),
    }
}

fn describe(value: Option<&Value>) -> String {
    value.map(Value::to_string).unwrap_or_else(|| "nothing".to_string())
}

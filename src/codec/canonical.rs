//! Canonical signable rendering: deterministic, whitespace-free JSON bytes.
//!
//! The output of [`render_signable`] is what a private key signs, so the
//! one property that matters is byte-identity: two processes handed
//! logically equal values must emit the same bytes. That rules out any
//! dependence on map iteration order — keys are collected and sorted
//! lexicographically at every nesting level, explicitly, every time.
//!
//! We deliberately do not feed the value through `serde_json::to_vec` and
//! hope the map type happens to be ordered. Canonical form is a contract;
//! contracts get their own code path.

use serde_json::Value;
use thiserror::Error;

/// Errors raised when a value outside the supported shape set reaches the
/// signable renderer.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A floating-point number that cannot be rendered as an exact integer.
    /// Canonical form has no representation for `1.5` — amounts and
    /// sequence numbers travel as decimal strings precisely to avoid
    /// cross-platform float behavior.
    #[error("number {value} cannot be canonically rendered without precision loss")]
    LossyNumber { value: f64 },

    /// The underlying JSON string writer failed. Practically unreachable
    /// for valid UTF-8 input, but crypto-adjacent code does not get to
    /// assume that.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders `value` as canonical signable bytes.
///
/// Rules:
/// - objects emit their keys in lexicographic (byte) order at every level;
/// - no insignificant whitespace anywhere;
/// - integers render as plain decimals; floats are accepted only when they
///   carry no fractional part;
/// - strings use standard JSON escaping.
///
/// # Errors
///
/// [`EncodingError::LossyNumber`] if a non-integral or non-finite float is
/// encountered at any depth.
pub fn render_signable(value: &Value) -> Result<Vec<u8>, EncodingError> {
    let mut out = String::with_capacity(256);
    write_value(value, &mut out)?;
    Ok(out.into_bytes())
}

fn write_value(value: &Value, out: &mut String) -> Result<(), EncodingError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(n, out)?,
        Value::String(s) => out.push_str(&serde_json::to_string(s)?),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Sort explicitly. The map type may or may not preserve
            // insertion order depending on feature flags; canonical form
            // cannot care either way.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, child)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_value(child, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_number(n: &serde_json::Number, out: &mut String) -> Result<(), EncodingError> {
    if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
        return Ok(());
    }
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
        return Ok(());
    }
    // Float territory. Only exact integers survive.
    let f = n.as_f64().unwrap_or(f64::NAN);
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(EncodingError::LossyNumber { value: f });
    }
    // Integral but out of i64/u64 range (e.g. 1e30) still loses precision
    // in decimal rendering, so it is rejected too.
    if f < i64::MIN as f64 || f > u64::MAX as f64 {
        return Err(EncodingError::LossyNumber { value: f });
    }
    if f < 0.0 {
        out.push_str(&(f as i64).to_string());
    } else {
        out.push_str(&(f as u64).to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_str(v: &Value) -> String {
        String::from_utf8(render_signable(v).unwrap()).unwrap()
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(render_str(&json!(null)), "null");
        assert_eq!(render_str(&json!(true)), "true");
        assert_eq!(render_str(&json!(false)), "false");
        assert_eq!(render_str(&json!(42)), "42");
        assert_eq!(render_str(&json!(-7)), "-7");
        assert_eq!(render_str(&json!("hello")), "\"hello\"");
    }

    #[test]
    fn keys_sorted_at_top_level() {
        let v = json!({"zulu": 1, "alpha": 2, "mike": 3});
        assert_eq!(render_str(&v), r#"{"alpha":2,"mike":3,"zulu":1}"#);
    }

    #[test]
    fn keys_sorted_at_every_nesting_level() {
        let v = json!({
            "outer_b": {"y": 1, "x": 2},
            "outer_a": [{"b": 1, "a": 2}],
        });
        assert_eq!(
            render_str(&v),
            r#"{"outer_a":[{"a":2,"b":1}],"outer_b":{"x":2,"y":1}}"#
        );
    }

    #[test]
    fn no_insignificant_whitespace() {
        let v = json!({"a": [1, 2, 3], "b": {"c": "d"}});
        let s = render_str(&v);
        assert!(!s.contains(' '));
        assert!(!s.contains('\n'));
    }

    #[test]
    fn array_order_is_preserved() {
        // Arrays are ordered data; only object keys get sorted.
        let v = json!(["c", "a", "b"]);
        assert_eq!(render_str(&v), r#"["c","a","b"]"#);
    }

    #[test]
    fn strings_are_escaped() {
        let v = json!({"memo": "line1\nline2 \"quoted\""});
        assert_eq!(render_str(&v), r#"{"memo":"line1\nline2 \"quoted\""}"#);
    }

    #[test]
    fn integral_float_renders_as_integer() {
        let v = json!(3.0);
        assert_eq!(render_str(&v), "3");
    }

    #[test]
    fn fractional_float_is_rejected() {
        let err = render_signable(&json!(1.5)).unwrap_err();
        assert!(matches!(err, EncodingError::LossyNumber { .. }));
    }

    #[test]
    fn fractional_float_rejected_at_depth() {
        let v = json!({"outer": [{"inner": 0.25}]});
        assert!(render_signable(&v).is_err());
    }

    #[test]
    fn logically_equal_inputs_render_identically() {
        // Same fields, different construction order.
        let a = json!({"chain_id": "test", "sequence": "5"});
        let b = json!({"sequence": "5", "chain_id": "test"});
        assert_eq!(render_signable(&a).unwrap(), render_signable(&b).unwrap());
    }

    #[test]
    fn output_parses_back_to_equal_value() {
        let v = json!({"a": [1, "two", null], "b": {"c": true}});
        let bytes = render_signable(&v).unwrap();
        let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reparsed, v);
    }
}

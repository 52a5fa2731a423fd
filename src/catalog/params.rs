//! Named effect parameters.
//!
//! Augments, abilities, items and trait tiers carry loosely-typed
//! parameters (`"XPAmount": 4`, `"ShieldPercent": 0.3`). Effect code reads
//! them with a fallback so missing or mistyped data degrades to the
//! default instead of failing.
//!
//! ## ParamValue Types
//!
//! - `Int`: counts, amounts
//! - `Float`: percentages, durations
//! - `Bool`: flags
//! - `Text`: names
//! - `FloatList`: per-star scaling values

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One parameter value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    FloatList(Vec<f64>),
}

impl ParamValue {
    /// Numeric view. Ints widen to floats.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view. Floats with no fractional part narrow to ints.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            ParamValue::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float_list(&self) -> Option<&[f64]> {
        match self {
            ParamValue::FloatList(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(v: Vec<f64>) -> Self {
        ParamValue::FloatList(v)
    }
}

/// Parameter bag keyed by name.
///
/// ```
/// use rust_autobattler::catalog::EffectParams;
///
/// let params = EffectParams::new().with("XPAmount", 4).with("ShieldPercent", 0.3);
/// assert_eq!(params.i64_or("XPAmount", 0), 4);
/// assert_eq!(params.f64_or("ShieldPercent", 0.0), 0.3);
/// assert_eq!(params.f64_or("Missing", 1.5), 1.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectParams {
    values: FxHashMap<String, ParamValue>,
}

impl EffectParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Numeric parameter, or `default` if absent or non-numeric.
    #[must_use]
    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(ParamValue::as_f64).unwrap_or(default)
    }

    /// Integer parameter, or `default` if absent or non-integral.
    #[must_use]
    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(ParamValue::as_i64).unwrap_or(default)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_views() {
        assert_eq!(ParamValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(ParamValue::Float(2.0).as_i64(), Some(2));
        assert_eq!(ParamValue::Float(2.5).as_i64(), None);
        assert_eq!(ParamValue::Text("x".into()).as_f64(), None);
    }

    #[test]
    fn test_fallbacks_on_wrong_type() {
        let params = EffectParams::new().with("Duration", "long");
        assert_eq!(params.f64_or("Duration", 10.0), 10.0);
        assert_eq!(params.i64_or("Duration", 10), 10);
    }

    #[test]
    fn test_untagged_json() {
        let params: EffectParams =
            serde_json::from_str(r#"{"XPAmount": 4, "ShieldPercent": 0.3, "Name": "Rumble"}"#)
                .unwrap();
        assert_eq!(params.get("XPAmount"), Some(&ParamValue::Int(4)));
        assert_eq!(params.get("ShieldPercent"), Some(&ParamValue::Float(0.3)));
        assert_eq!(params.get("Name").and_then(ParamValue::as_text), Some("Rumble"));
        assert_eq!(params.len(), 3);
    }
}

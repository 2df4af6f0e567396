// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A tabular cell value, represented as a native Rust type.
///
/// The serde representation is untagged and matches the ingestion JSON value
/// domain: `null` ↔ `Undefined`, integer ↔ `Int`, number ↔ `Float`,
/// string ↔ `Utf8`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// An 8-byte signed integer
	Int(i64),
	/// An 8-byte floating point
	Float(f64),
	/// A UTF-8 encoded text
	Utf8(String),
}

impl Value {
	/// Classify the declared column type this value implies.
	///
	/// Numeric values without a fractional part map to `Integer`, numeric
	/// values with one to `Real`, everything else (text, undefined) to
	/// `Text`.
	pub fn infer_type(&self) -> ColumnType {
		match self {
			Value::Int(_) => ColumnType::Integer,
			Value::Float(value) if value.fract() == 0.0 => ColumnType::Integer,
			Value::Float(_) => ColumnType::Real,
			Value::Utf8(_) | Value::Undefined => ColumnType::Text,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => Ok(()),
			Value::Int(value) => write!(f, "{}", value),
			Value::Float(value) => write!(f, "{}", value),
			Value::Utf8(value) => f.write_str(value),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}

/// Declared SQL type of a synthesized column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
	Integer,
	Real,
	Text,
}

impl ColumnType {
	pub fn as_str(&self) -> &'static str {
		match self {
			ColumnType::Integer => "INTEGER",
			ColumnType::Real => "REAL",
			ColumnType::Text => "TEXT",
		}
	}
}

impl Display for ColumnType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_infer_type() {
		assert_eq!(Value::Int(42).infer_type(), ColumnType::Integer);
		assert_eq!(Value::Float(2.0).infer_type(), ColumnType::Integer);
		assert_eq!(Value::Float(2.5).infer_type(), ColumnType::Real);
		assert_eq!(Value::Utf8("x".into()).infer_type(), ColumnType::Text);
		assert_eq!(Value::Undefined.infer_type(), ColumnType::Text);
	}

	#[test]
	fn test_serde_untagged_roundtrip() {
		let values: Vec<Value> = serde_json::from_str(r#"[1, 2.5, "text", null]"#).unwrap();
		assert_eq!(
			values,
			vec![Value::Int(1), Value::Float(2.5), Value::Utf8("text".into()), Value::Undefined]
		);

		let json = serde_json::to_string(&values).unwrap();
		assert_eq!(json, r#"[1,2.5,"text",null]"#);
	}
}

// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};
use tabulon_type::{Error, Result};

/// A chart descriptor: a sequence of series plus a layout/presentation
/// descriptor. The contents are opaque to the host; only the presence of
/// both fields is validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
	pub data: serde_json::Value,
	pub layout: serde_json::Value,
}

impl ChartSpec {
	/// Validate the shape of a script's return value.
	///
	/// A missing `data` or `layout` field is a shape violation, kept
	/// distinct from script errors so callers can report it specifically.
	pub fn from_value(value: serde_json::Value) -> Result<ChartSpec> {
		let serde_json::Value::Object(mut object) = value else {
			return Err(Error::ChartShape {
				field: "data",
			});
		};

		let data = object.remove("data").ok_or(Error::ChartShape {
			field: "data",
		})?;
		let layout = object.remove("layout").ok_or(Error::ChartShape {
			field: "layout",
		})?;

		Ok(ChartSpec {
			data,
			layout,
		})
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_valid_shape() {
		let chart = ChartSpec::from_value(json!({
			"data": [{"type": "bar", "x": ["a"], "y": [1]}],
			"layout": {"title": "Sales"}
		}))
		.unwrap();

		assert_eq!(chart.data[0]["type"], "bar");
		assert_eq!(chart.layout["title"], "Sales");
	}

	#[test]
	fn test_missing_fields_are_shape_violations() {
		let err = ChartSpec::from_value(json!({"layout": {}})).unwrap_err();
		assert!(matches!(err, Error::ChartShape { field: "data" }), "{err}");

		let err = ChartSpec::from_value(json!({"data": []})).unwrap_err();
		assert!(matches!(err, Error::ChartShape { field: "layout" }), "{err}");

		let err = ChartSpec::from_value(json!([1, 2, 3])).unwrap_err();
		assert!(matches!(err, Error::ChartShape { .. }), "{err}");
	}
}

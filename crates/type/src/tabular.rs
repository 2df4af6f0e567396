// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Loosely-typed tabular input as delivered by a data provider.
///
/// Table order and column order are preserved; values are positional, not
/// named. Every row must carry exactly `columns.len()` values — violations
/// surface as ingestion failures when the schema is synthesized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TabularInput {
	pub tables: IndexMap<String, TableData>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableData {
	pub columns: Vec<String>,
	pub rows: Vec<Vec<Value>>,
}

/// Result of a query: column names plus positionally aligned row tuples.
///
/// Produced fresh by every query and immutable once returned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryResult {
	pub columns: Vec<String>,
	pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
	/// The result of a statement that produces no result set.
	pub fn empty() -> Self {
		Self {
			columns: Vec::new(),
			rows: Vec::new(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty() && self.rows.is_empty()
	}
}

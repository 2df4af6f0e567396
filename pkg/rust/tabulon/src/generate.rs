// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! Boundary types for the natural-language generation collaborator.
//!
//! The collaborator is an opaque external service: it accepts a question (or
//! hint) plus schema or sample data and returns a SQL string or a script
//! string. No transport is owned here; these are the serde shapes that cross
//! the boundary, plus the fence stripping the responses need before use.

use serde::{Deserialize, Serialize};
use tabulon_type::Value;

/// Sample rows included in a script generation request.
pub const SAMPLE_ROWS: usize = 10;

/// Natural-language-to-SQL request: the question plus the full DDL text of
/// the loaded dataset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SqlRequest {
	pub question: String,
	pub schema: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SqlResponse {
	pub sql: String,
}

/// Natural-language-to-script request: result columns, a bounded data sample
/// and an optional user preference.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRequest {
	pub columns: Vec<String>,
	pub sample_data: Vec<Vec<Value>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_hint: Option<String>,
}

impl ScriptRequest {
	/// Build a request from a query result, keeping only the first
	/// [`SAMPLE_ROWS`] rows as sample data.
	pub fn new(columns: &[String], rows: &[Vec<Value>], user_hint: Option<String>) -> Self {
		Self {
			columns: columns.to_vec(),
			sample_data: rows.iter().take(SAMPLE_ROWS).cloned().collect(),
			user_hint,
		}
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScriptResponse {
	pub script: String,
}

/// Strip a wrapping markdown code fence from collaborator response text.
///
/// Removes a leading ``` line (with an optional language tag) and a trailing
/// ``` line; unfenced text is returned trimmed and otherwise untouched.
pub fn strip_code_fences(text: &str) -> &str {
	let mut stripped = text.trim();

	if let Some(rest) = stripped.strip_prefix("```") {
		stripped = match rest.split_once('\n') {
			Some((_tag, body)) => body,
			None => rest,
		};
	}
	if let Some(rest) = stripped.trim_end().strip_suffix("```") {
		stripped = rest;
	}

	stripped.trim()
}

// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the whole engine.
///
/// `Ingestion` is fatal to the current load attempt; everything else is
/// recoverable and surfaced to the caller as a value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Malformed tabular input or DDL/DML rejected by the engine. The
	/// load aborts; no partial dataset remains queryable.
	#[error("ingestion failed: {message}")]
	Ingestion {
		message: String,
	},

	/// A submitted SQL statement is invalid or semantically rejected.
	/// The store remains usable for subsequent queries.
	#[error("query failed: {message}")]
	Query {
		message: String,
	},

	/// A sandboxed script trapped or otherwise failed internally.
	#[error("script failed: {message}")]
	Script {
		message: String,
	},

	/// A sandboxed script exceeded its deadline and was torn down.
	#[error("script exceeded the {timeout_ms}ms deadline")]
	ScriptTimeout {
		timeout_ms: u64,
	},

	/// A script completed but its return value is not a chart descriptor.
	/// Distinct from `Script` so callers can give a specific message.
	#[error("script result is missing the `{field}` field")]
	ChartShape {
		field: &'static str,
	},
}

impl Error {
	pub fn ingestion(message: impl Into<String>) -> Self {
		Error::Ingestion {
			message: message.into(),
		}
	}

	pub fn query(message: impl Into<String>) -> Self {
		Error::Query {
			message: message.into(),
		}
	}

	pub fn script(message: impl Into<String>) -> Self {
		Error::Script {
			message: message.into(),
		}
	}
}

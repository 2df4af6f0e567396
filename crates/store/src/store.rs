// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! The embedded relational store: one in-memory SQLite instance per loaded
//! dataset, replaced wholesale on every load.

use rusqlite::{Connection, params_from_iter, types::ValueRef};
use tabulon_type::{Error, QueryResult, Result, Value};
use tracing::{debug, instrument};

use crate::synth::SynthesizedSchema;

/// Physical column metadata reflected from the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalColumn {
	pub name: String,
	pub declared_type: String,
	pub is_primary_key: bool,
}

/// Handle to the single live engine instance for one loaded dataset.
///
/// The handle is an explicitly owned resource, not ambient state: loading a
/// new dataset produces a new `Store` and the old one is discarded. Access is
/// synchronous and serial; callers must not issue overlapping queries.
#[derive(Debug)]
pub struct Store {
	conn: Connection,
	tables: Vec<String>,
	ddl: String,
}

impl Store {
	/// Load a synthesized dataset into a fresh engine instance.
	///
	/// Runs all DDL, then all inserts, aborting on the first engine error.
	/// On failure no handle is produced, so no partial dataset is ever
	/// queryable — the caller retries ingestion from scratch.
	#[instrument(name = "store::load", level = "debug", skip(schema), fields(tables = schema.tables.len()))]
	pub fn load(schema: &SynthesizedSchema) -> Result<Store> {
		let conn = Connection::open_in_memory()
			.map_err(|e| Error::ingestion(format!("failed to open engine: {}", e)))?;

		for ddl in &schema.ddl {
			conn.execute(ddl, [])
				.map_err(|e| Error::ingestion(format!("{}: {}", ddl, e)))?;
		}

		for plan in &schema.inserts {
			let mut stmt = conn
				.prepare(&plan.sql)
				.map_err(|e| Error::ingestion(format!("{}: {}", plan.sql, e)))?;
			for row in &plan.rows {
				stmt.execute(params_from_iter(row.iter().map(bind_value))).map_err(|e| {
					Error::ingestion(format!("insert into {} failed: {}", plan.table, e))
				})?;
			}
			debug!(table = %plan.table, rows = plan.rows.len(), "loaded table");
		}

		Ok(Store {
			conn,
			tables: schema.tables.iter().map(|table| table.name.clone()).collect(),
			ddl: schema.ddl_text(),
		})
	}

	/// Execute a SQL statement and collect its result set.
	///
	/// Statements that produce no result set return an empty `QueryResult`
	/// and still count as success. Nothing is cached; every call re-runs
	/// against the engine.
	#[instrument(name = "store::execute", level = "debug", skip(self, sql))]
	pub fn execute(&self, sql: &str) -> Result<QueryResult> {
		let mut stmt = self.conn.prepare(sql).map_err(query_failure)?;

		if stmt.column_count() == 0 {
			stmt.execute([]).map_err(query_failure)?;
			return Ok(QueryResult::empty());
		}

		let columns: Vec<String> = stmt.column_names().iter().map(|name| name.to_string()).collect();

		let mut rows = Vec::new();
		let mut raw = stmt.query([]).map_err(query_failure)?;
		while let Some(row) = raw.next().map_err(query_failure)? {
			let mut values = Vec::with_capacity(columns.len());
			for index in 0..columns.len() {
				values.push(read_value(row.get_ref(index).map_err(query_failure)?));
			}
			rows.push(values);
		}

		debug!(columns = columns.len(), rows = rows.len(), "query finished");
		Ok(QueryResult {
			columns,
			rows,
		})
	}

	/// Reflect the physical schema of a single table from engine metadata.
	pub fn introspect(&self, table: &str) -> Result<Vec<PhysicalColumn>> {
		let mut stmt = self
			.conn
			.prepare("SELECT name, type, pk FROM pragma_table_info(?1)")
			.map_err(query_failure)?;

		let columns = stmt
			.query_map([table], |row| {
				Ok(PhysicalColumn {
					name: row.get(0)?,
					declared_type: row.get(1)?,
					is_primary_key: row.get::<_, i64>(2)? > 0,
				})
			})
			.map_err(query_failure)?
			.collect::<rusqlite::Result<Vec<_>>>()
			.map_err(query_failure)?;

		Ok(columns)
	}

	/// Names of the dataset's tables, in load order.
	pub fn table_names(&self) -> &[String] {
		&self.tables
	}

	/// The full DDL text this dataset was created from.
	pub fn ddl(&self) -> &str {
		&self.ddl
	}
}

fn query_failure(error: rusqlite::Error) -> Error {
	Error::query(error.to_string())
}

fn bind_value(value: &Value) -> rusqlite::types::Value {
	match value {
		Value::Undefined => rusqlite::types::Value::Null,
		Value::Int(value) => rusqlite::types::Value::Integer(*value),
		Value::Float(value) => rusqlite::types::Value::Real(*value),
		Value::Utf8(value) => rusqlite::types::Value::Text(value.clone()),
	}
}

fn read_value(value: ValueRef<'_>) -> Value {
	match value {
		ValueRef::Null => Value::Undefined,
		ValueRef::Integer(value) => Value::Int(value),
		ValueRef::Real(value) => Value::Float(value),
		ValueRef::Text(text) => Value::Utf8(String::from_utf8_lossy(text).into_owned()),
		// Blobs are outside the ingestion value domain; only reachable
		// through ad-hoc SQL expressions.
		ValueRef::Blob(blob) => Value::Utf8(String::from_utf8_lossy(blob).into_owned()),
	}
}

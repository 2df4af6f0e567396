// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! Schema synthesis: turn loosely-typed tabular input into DDL, positional
//! insert plans and an inferred typed schema.

use tabulon_type::{ColumnType, Error, Result, TabularInput, Value};

/// A column with its inferred declared type.
#[derive(Clone, Debug, PartialEq)]
pub struct InferredColumn {
	pub name: String,
	pub ty: ColumnType,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InferredTable {
	pub name: String,
	pub columns: Vec<InferredColumn>,
}

/// One parameterized insert statement plus the raw rows to bind against it.
///
/// Values are bound positionally, never string-interpolated, so quoting
/// characters inside values cannot corrupt the statement.
#[derive(Clone, Debug)]
pub struct InsertPlan {
	pub table: String,
	pub sql: String,
	pub rows: Vec<Vec<Value>>,
}

/// Output of schema synthesis: DDL statements, insert plans and the inferred
/// schema, all in original table order.
#[derive(Clone, Debug)]
pub struct SynthesizedSchema {
	pub ddl: Vec<String>,
	pub inserts: Vec<InsertPlan>,
	pub tables: Vec<InferredTable>,
}

impl SynthesizedSchema {
	/// Full DDL text, one statement per line. This is the schema handed to
	/// the SQL generation collaborator.
	pub fn ddl_text(&self) -> String {
		let mut text = self.ddl.join(";\n");
		text.push(';');
		text
	}
}

/// Synthesize a relational schema from tabular input.
///
/// Column types are a pure function of the first row: the value at each
/// position classifies the column, and an empty table yields all-TEXT
/// columns. Later rows are not re-validated against the inferred type; a
/// conflicting value is stored under the engine's affinity rules or rejected
/// at insert time.
///
/// Table and column identifiers are emitted verbatim as SQL identifiers.
/// Malformed identifiers are a caller responsibility and surface as
/// ingestion failures when the engine rejects the DDL.
pub fn synthesize(input: &TabularInput) -> Result<SynthesizedSchema> {
	let mut ddl = Vec::with_capacity(input.tables.len());
	let mut inserts = Vec::with_capacity(input.tables.len());
	let mut tables = Vec::with_capacity(input.tables.len());

	for (name, data) in &input.tables {
		for (index, row) in data.rows.iter().enumerate() {
			if row.len() != data.columns.len() {
				return Err(Error::ingestion(format!(
					"table {} row {} has {} values, expected {}",
					name,
					index,
					row.len(),
					data.columns.len()
				)));
			}
		}

		let columns: Vec<InferredColumn> = data
			.columns
			.iter()
			.enumerate()
			.map(|(position, column)| InferredColumn {
				name: column.clone(),
				ty: data
					.rows
					.first()
					.map(|row| row[position].infer_type())
					.unwrap_or(ColumnType::Text),
			})
			.collect();

		let definitions: Vec<String> =
			columns.iter().map(|column| format!("{} {}", column.name, column.ty)).collect();
		ddl.push(format!("CREATE TABLE {} ({})", name, definitions.join(", ")));

		if !data.rows.is_empty() {
			let placeholders: Vec<&str> = data.columns.iter().map(|_| "?").collect();
			inserts.push(InsertPlan {
				table: name.clone(),
				sql: format!("INSERT INTO {} VALUES ({})", name, placeholders.join(", ")),
				rows: data.rows.clone(),
			});
		}

		tables.push(InferredTable {
			name: name.clone(),
			columns,
		});
	}

	Ok(SynthesizedSchema {
		ddl,
		inserts,
		tables,
	})
}

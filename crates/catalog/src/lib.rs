// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! Derived, read-only table schemas with heuristic foreign-key inference.
//!
//! Recomputed once per dataset load from engine metadata; never mutated
//! incrementally. The inference is a naming-convention heuristic with no
//! access to declared constraints: a dataset using different conventions
//! yields zero relationships, which is expected, not an error.

use serde::Serialize;
use tabulon_store::Store;
use tabulon_type::Result;
use tracing::debug;

/// The referenced side of an inferred foreign key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reference {
	pub table: String,
	pub column: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMeta {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: String,
	pub is_primary_key: bool,
	pub is_foreign_key: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub references: Option<Reference>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableSchema {
	pub name: String,
	pub columns: Vec<ColumnMeta>,
}

/// Classify a column as a foreign key from its name alone.
///
/// A non-primary-key column ending in `_id` is resolved against the dataset's
/// table names by stripping the suffix and trying, in priority order, the
/// base name, the base name + `s`, and the base name + `es`. The referenced
/// column is always assumed to be named `id`. No candidate match means the
/// column is not a foreign key.
pub fn reference_for(column: &str, is_primary_key: bool, tables: &[String]) -> Option<Reference> {
	if is_primary_key {
		return None;
	}

	let base = column.strip_suffix("_id")?;
	for candidate in [base.to_string(), format!("{}s", base), format!("{}es", base)] {
		if tables.iter().any(|table| table == &candidate) {
			return Some(Reference {
				table: candidate,
				column: "id".to_string(),
			});
		}
	}
	None
}

/// Derive per-table schemas for every table in the store.
///
/// Column names, declared types and primary-key flags come from engine
/// metadata (`introspect`); only the foreign-key classification is inferred.
pub fn infer_relationships(store: &Store) -> Result<Vec<TableSchema>> {
	let tables = store.table_names().to_vec();

	let schemas = tables
		.iter()
		.map(|table| {
			let columns = store
				.introspect(table)?
				.into_iter()
				.map(|column| {
					let references = reference_for(&column.name, column.is_primary_key, &tables);
					ColumnMeta {
						name: column.name,
						ty: column.declared_type,
						is_primary_key: column.is_primary_key,
						is_foreign_key: references.is_some(),
						references,
					}
				})
				.collect();
			Ok(TableSchema {
				name: table.clone(),
				columns,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	let relationships: usize =
		schemas.iter().flat_map(|schema| &schema.columns).filter(|column| column.is_foreign_key).count();
	debug!(tables = schemas.len(), relationships, "derived table schemas");

	Ok(schemas)
}

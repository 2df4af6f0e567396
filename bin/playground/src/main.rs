// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

use tabulon::{Result, Session, Value};
use tabulon_testing::{dataset_catalog, retail_dataset};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Returns a static bar-chart descriptor to exercise the sandbox end to end.
const DEMO_SCRIPT: &str = r#"(module
	(memory (export "memory") 1)
	(data (i32.const 1024) "{\"data\":[{\"type\":\"bar\"}],\"layout\":{\"title\":\"Demo\"}}")
	(func (export "alloc") (param i32) (result i32) (i32.const 4096))
	(func (export "run") (param i32 i32) (result i64)
		(i64.or (i64.shl (i64.const 1024) (i64.const 32)) (i64.const 51))))"#;

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
		.init();

	for dataset in dataset_catalog() {
		info!(name = dataset.name, description = dataset.description, "available dataset");
	}

	let mut session = Session::new();
	session.load_dataset(&retail_dataset())?;

	info!(schema = session.schema_ddl()?, "synthesized schema");

	for schema in session.table_schemas() {
		for column in &schema.columns {
			if let Some(reference) = &column.references {
				info!(
					table = schema.name,
					column = column.name,
					references = format!("{}.{}", reference.table, reference.column),
					"inferred relationship"
				);
			}
		}
	}

	let result = session.execute(
		"SELECT p.category, ROUND(SUM(s.amount), 2) AS revenue \
		 FROM sales s JOIN products p ON p.id = s.product_id \
		 GROUP BY p.category ORDER BY revenue DESC",
	)?;
	for row in &result.rows {
		let category = &row[0];
		let revenue = match &row[1] {
			Value::Float(value) => *value,
			Value::Int(value) => *value as f64,
			_ => 0.0,
		};
		info!(%category, revenue, "revenue by category");
	}

	let browse = session.select_table("sales")?;
	info!(
		loaded = browse.loaded_count(),
		total = browse.total_count(),
		has_more = browse.has_more(),
		"browsing sales"
	);
	let browse = session.load_all()?;
	info!(loaded = browse.loaded_count(), "loaded all sales rows");

	let chart = session.visualize(DEMO_SCRIPT, &result)?;
	info!(chart = %serde_json::to_string(&chart).unwrap_or_default(), "chart descriptor");

	Ok(())
}

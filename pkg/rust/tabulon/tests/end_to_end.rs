// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

use tabulon::{Error, Session, TableData, TabularInput, Value};
use tabulon_testing::{numbered_table, patrol_dataset, retail_dataset};

#[test]
fn test_load_and_roundtrip_retail_dataset() {
	let input = retail_dataset();
	let mut session = Session::new();
	session.load_dataset(&input).unwrap();

	assert_eq!(session.table_names().unwrap(), &["products", "customers", "sales"]);

	// Round-trip: SELECT * returns the original rows in original order.
	let result = session.execute("SELECT * FROM products").unwrap();
	assert_eq!(result.columns, vec!["id", "name", "category", "price"]);
	assert_eq!(result.rows, input.tables["products"].rows);

	let sales = session.execute("SELECT * FROM sales").unwrap();
	assert_eq!(sales.rows, input.tables["sales"].rows);
}

#[test]
fn test_schema_ddl_text() {
	let mut session = Session::new();
	session.load_dataset(&retail_dataset()).unwrap();

	let ddl = session.schema_ddl().unwrap();
	assert!(ddl.starts_with("CREATE TABLE products (id INTEGER, name TEXT, category TEXT, price REAL);"));
	assert!(ddl.ends_with("quantity INTEGER, amount REAL);"));
}

#[test]
fn test_inferred_relationships() {
	let mut session = Session::new();
	session.load_dataset(&retail_dataset()).unwrap();

	let schemas = session.table_schemas();
	let sales = schemas.iter().find(|schema| schema.name == "sales").unwrap();

	let product_id = sales.columns.iter().find(|column| column.name == "product_id").unwrap();
	assert!(product_id.is_foreign_key);
	assert_eq!(product_id.references.as_ref().unwrap().table, "products");
	assert_eq!(product_id.references.as_ref().unwrap().column, "id");

	// Plain columns carry no reference.
	let amount = sales.columns.iter().find(|column| column.name == "amount").unwrap();
	assert!(!amount.is_foreign_key);
}

#[test]
fn test_relationships_across_singular_table_names() {
	let mut session = Session::new();
	session.load_dataset(&patrol_dataset()).unwrap();

	let schemas = session.table_schemas();
	let patrols = schemas.iter().find(|schema| schema.name == "patrols").unwrap();
	let site_id = patrols.columns.iter().find(|column| column.name == "site_id").unwrap();

	// "site" does not exist; "sites" does (base + `s` candidate).
	assert_eq!(site_id.references.as_ref().unwrap().table, "sites");
}

#[test]
fn test_aggregate_query_over_join() {
	let mut session = Session::new();
	session.load_dataset(&retail_dataset()).unwrap();

	let result = session
		.execute(
			"SELECT p.category, COUNT(*) AS n FROM sales s \
			 JOIN products p ON p.id = s.product_id \
			 GROUP BY p.category ORDER BY p.category",
		)
		.unwrap();

	assert_eq!(result.columns, vec!["category", "n"]);
	assert_eq!(result.rows.len(), 3);
	let total: i64 = result
		.rows
		.iter()
		.map(|row| match &row[1] {
			Value::Int(n) => *n,
			other => panic!("expected count, got {:?}", other),
		})
		.sum();
	assert_eq!(total, 500);
}

#[test]
fn test_query_failure_is_recoverable() {
	let mut session = Session::new();
	session.load_dataset(&retail_dataset()).unwrap();

	let err = session.execute("SELECT * FROM missing").unwrap_err();
	assert!(matches!(err, Error::Query { .. }), "{err}");

	// The store remains usable.
	assert!(session.execute("SELECT COUNT(*) FROM products").is_ok());
}

#[test]
fn test_pagination_incremental_and_load_all_agree() {
	let mut session = Session::new().with_page_size(100);
	session.load_dataset(&numbered_table(250)).unwrap();

	let browse = session.select_table("events").unwrap();
	assert_eq!(browse.loaded_count(), 100);
	assert_eq!(browse.total_count(), 250);
	assert!(browse.has_more());

	let browse = session.load_more().unwrap();
	assert_eq!(browse.loaded_count(), 200);
	assert!(browse.has_more());

	let browse = session.load_more().unwrap();
	assert_eq!(browse.loaded_count(), 250);
	assert!(!browse.has_more());
	let incremental: Vec<_> = browse.rows().to_vec();

	// Same endpoint through load_all in one step.
	session.select_table("events").unwrap();
	let browse = session.load_all().unwrap();
	assert_eq!(browse.loaded_count(), 250);
	assert!(!browse.has_more());
	assert_eq!(browse.rows(), incremental.as_slice());
}

#[test]
fn test_selecting_table_replaces_browse_session() {
	let mut session = Session::new().with_page_size(10);
	session.load_dataset(&retail_dataset()).unwrap();

	session.select_table("sales").unwrap();
	let browse = session.select_table("products").unwrap();

	assert_eq!(browse.table_name(), "products");
	assert_eq!(browse.total_count(), 20);
	assert_eq!(browse.loaded_count(), 10);
}

#[test]
fn test_browse_without_selection_fails() {
	let mut session = Session::new();
	session.load_dataset(&retail_dataset()).unwrap();

	let err = session.load_more().unwrap_err();
	assert!(matches!(err, Error::Query { .. }), "{err}");
}

#[test]
fn test_failed_ingestion_leaves_no_dataset() {
	let mut session = Session::new();
	session.load_dataset(&retail_dataset()).unwrap();
	assert!(session.is_ready());

	// A malformed identifier is rejected by the engine at DDL time.
	let mut tables = indexmap_of("bad table!");
	tables.get_index_mut(0).unwrap().1.rows.push(vec![Value::Int(1)]);
	let bad = TabularInput {
		tables,
	};

	let err = session.load_dataset(&bad).unwrap_err();
	assert!(matches!(err, Error::Ingestion { .. }), "{err}");

	// No fallback to the previously loaded dataset.
	assert!(!session.is_ready());
	let err = session.execute("SELECT 1").unwrap_err();
	assert!(matches!(err, Error::Query { .. }), "{err}");
}

#[test]
fn test_reload_replaces_dataset_wholesale() {
	let mut session = Session::new();
	session.load_dataset(&retail_dataset()).unwrap();
	session.select_table("products").unwrap();

	session.load_dataset(&patrol_dataset()).unwrap();

	assert_eq!(session.table_names().unwrap(), &["sites", "patrols", "checkpoints"]);
	// The browse session of the old dataset is gone.
	assert!(session.browse().is_none());
	// The old dataset's tables are not visible.
	assert!(session.execute("SELECT * FROM products").is_err());
}

fn indexmap_of(table: &str) -> indexmap::IndexMap<String, TableData> {
	let mut tables = indexmap::IndexMap::new();
	tables.insert(
		table.to_string(),
		TableData {
			columns: vec!["id".to_string()],
			rows: vec![],
		},
	);
	tables
}

// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! Deterministic sample datasets.
//!
//! Generators are seeded, so every call produces the same dataset — tests
//! and demos can assert on concrete values.

use indexmap::IndexMap;
use rand::{RngExt, SeedableRng, rngs::StdRng};
use tabulon_type::{TableData, TabularInput, Value};

const SEED: u64 = 42;

const PRODUCTS: &[(&str, &str, f64)] = &[
	("Laptop Pro", "Electronics", 1299.99),
	("Wireless Mouse", "Electronics", 49.99),
	("Mechanical Keyboard", "Electronics", 149.99),
	("USB-C Hub", "Electronics", 79.99),
	("Monitor 27\"", "Electronics", 399.99),
	("Office Chair", "Furniture", 299.99),
	("Standing Desk", "Furniture", 599.99),
	("Desk Lamp", "Furniture", 45.99),
	("Filing Cabinet", "Furniture", 189.99),
	("Bookshelf", "Furniture", 129.99),
	("Notebook Pack", "Office Supplies", 12.99),
	("Pen Set", "Office Supplies", 8.99),
	("Stapler", "Office Supplies", 15.99),
	("Paper Ream", "Office Supplies", 24.99),
	("Binder Set", "Office Supplies", 19.99),
	("Webcam HD", "Electronics", 89.99),
	("Headphones", "Electronics", 199.99),
	("Desk Organizer", "Office Supplies", 34.99),
	("Whiteboard", "Furniture", 79.99),
	("Ergonomic Footrest", "Furniture", 59.99),
];

const REGIONS: &[&str] = &["North", "South", "East", "West"];
const SEGMENTS: &[&str] = &["Enterprise", "SMB", "Consumer", "Government"];

const FIRST_NAMES: &[&str] = &[
	"Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Ivy", "Jack", "Kate", "Leo", "Mia",
	"Noah", "Olivia", "Paul", "Quinn", "Rose", "Sam", "Tina", "Uma", "Victor", "Wendy", "Xavier",
];
const LAST_NAMES: &[&str] = &[
	"Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
	"Wilson", "Anderson", "Taylor", "Thomas",
];

/// Name and description of a built-in dataset.
#[derive(Clone, Copy, Debug)]
pub struct DatasetInfo {
	pub name: &'static str,
	pub description: &'static str,
}

pub fn dataset_catalog() -> Vec<DatasetInfo> {
	vec![
		DatasetInfo {
			name: "retail",
			description: "Products, customers and a year of sales",
		},
		DatasetInfo {
			name: "patrol",
			description: "Security sites, patrols and checkpoints",
		},
	]
}

/// Retail dataset: `products`, `customers` and `sales`, where sales carries
/// `product_id` and `customer_id` foreign keys by naming convention.
pub fn retail_dataset() -> TabularInput {
	let mut rng = StdRng::seed_from_u64(SEED);

	let products: Vec<Vec<Value>> = PRODUCTS
		.iter()
		.enumerate()
		.map(|(index, (name, category, price))| {
			vec![Value::Int(index as i64 + 1), (*name).into(), (*category).into(), Value::Float(*price)]
		})
		.collect();

	let customers: Vec<Vec<Value>> = (1..=50i64)
		.map(|id| {
			let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
			let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
			vec![
				Value::Int(id),
				format!("{} {}", first, last).into(),
				REGIONS[rng.random_range(0..REGIONS.len())].into(),
				SEGMENTS[rng.random_range(0..SEGMENTS.len())].into(),
			]
		})
		.collect();

	let sales: Vec<Vec<Value>> = (1..=500i64)
		.map(|id| {
			let product = rng.random_range(0..PRODUCTS.len());
			let customer = rng.random_range(1..=50i64);
			let day = rng.random_range(0..365u32);
			let quantity = rng.random_range(1..=10i64);
			let amount = (PRODUCTS[product].2 * quantity as f64 * 100.0).round() / 100.0;
			vec![
				Value::Int(id),
				date_string(day).into(),
				Value::Int(product as i64 + 1),
				Value::Int(customer),
				Value::Int(quantity),
				Value::Float(amount),
			]
		})
		.collect();

	let mut tables = IndexMap::new();
	tables.insert(
		"products".to_string(),
		TableData {
			columns: columns(&["id", "name", "category", "price"]),
			rows: products,
		},
	);
	tables.insert(
		"customers".to_string(),
		TableData {
			columns: columns(&["id", "name", "region", "segment"]),
			rows: customers,
		},
	);
	tables.insert(
		"sales".to_string(),
		TableData {
			columns: columns(&["id", "date", "product_id", "customer_id", "quantity", "amount"]),
			rows: sales,
		},
	);
	TabularInput {
		tables,
	}
}

/// Patrol dataset: `sites`, `patrols` (with `site_id`) and `checkpoints`
/// (with `patrol_id`).
pub fn patrol_dataset() -> TabularInput {
	let sites = vec![
		vec![Value::Int(1), "Riverside Warehouse".into(), "Docklands".into()],
		vec![Value::Int(2), "Northgate Mall".into(), "City North".into()],
		vec![Value::Int(3), "Harbor Terminal".into(), "Docklands".into()],
	];

	let patrols = vec![
		vec![Value::Int(1), Value::Int(1), "22:00".into(), "06:00".into()],
		vec![Value::Int(2), Value::Int(1), "06:00".into(), "14:00".into()],
		vec![Value::Int(3), Value::Int(2), "20:00".into(), "04:00".into()],
		vec![Value::Int(4), Value::Int(3), "22:00".into(), "06:00".into()],
	];

	let checkpoints = vec![
		vec![Value::Int(1), Value::Int(1), "Main Gate".into(), Value::Int(1)],
		vec![Value::Int(2), Value::Int(1), "Loading Bay".into(), Value::Int(0)],
		vec![Value::Int(3), Value::Int(2), "Perimeter East".into(), Value::Int(1)],
		vec![Value::Int(4), Value::Int(3), "Food Court".into(), Value::Int(1)],
		vec![Value::Int(5), Value::Int(4), "Pier 4".into(), Value::Undefined],
	];

	let mut tables = IndexMap::new();
	tables.insert(
		"sites".to_string(),
		TableData {
			columns: columns(&["id", "name", "district"]),
			rows: sites,
		},
	);
	tables.insert(
		"patrols".to_string(),
		TableData {
			columns: columns(&["id", "site_id", "starts_at", "ends_at"]),
			rows: patrols,
		},
	);
	tables.insert(
		"checkpoints".to_string(),
		TableData {
			columns: columns(&["id", "patrol_id", "name", "scanned"]),
			rows: checkpoints,
		},
	);
	TabularInput {
		tables,
	}
}

/// Single-table dataset of `rows` numbered rows, for pagination tests.
pub fn numbered_table(rows: usize) -> TabularInput {
	let mut tables = IndexMap::new();
	tables.insert(
		"events".to_string(),
		TableData {
			columns: columns(&["id", "label"]),
			rows: (1..=rows as i64)
				.map(|n| vec![Value::Int(n), format!("event-{}", n).into()])
				.collect(),
		},
	);
	TabularInput {
		tables,
	}
}

fn columns(names: &[&str]) -> Vec<String> {
	names.iter().map(|name| name.to_string()).collect()
}

// Days since 2024-01-01 rendered as YYYY-MM-DD; 2024 is a leap year.
fn date_string(day_of_year: u32) -> String {
	const MONTH_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
	let mut remaining = day_of_year;
	for (month, days) in MONTH_DAYS.iter().enumerate() {
		if remaining < *days {
			return format!("2024-{:02}-{:02}", month + 1, remaining + 1);
		}
		remaining -= days;
	}
	"2024-12-31".to_string()
}

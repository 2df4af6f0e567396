// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! Incremental table browsing built on repeated bounded queries.
//!
//! Each page requests `page_size + 1` rows: the extra row only signals that
//! more pages exist, so no separate existence query is needed. One extra row
//! transferred per page is the right tradeoff for small page sizes.

use tabulon_store::Store;
use tabulon_type::{Error, Result, Value};
use tracing::{debug, instrument};

pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Per-table incremental loading state.
///
/// Created when a table is selected, mutated in place by `load_more` /
/// `load_all`, and replaced wholesale when another table is selected. On a
/// failed fetch the prior state is left untouched.
#[derive(Debug)]
pub struct BrowseSession {
	table: String,
	page_size: usize,
	columns: Vec<String>,
	rows: Vec<Vec<Value>>,
	loaded: usize,
	total: usize,
	has_more: bool,
}

impl BrowseSession {
	/// Select a table: count its rows, then fetch the first page.
	#[instrument(name = "browse::select", level = "debug", skip(store))]
	pub fn select(store: &Store, table: &str, page_size: usize) -> Result<BrowseSession> {
		let total = count_rows(store, table)?;

		let result = store.execute(&format!("SELECT * FROM {} LIMIT {} OFFSET 0", table, page_size + 1))?;
		let mut rows = result.rows;
		let has_more = rows.len() > page_size;
		if has_more {
			rows.truncate(page_size);
		}

		debug!(table, loaded = rows.len(), total, has_more, "selected table");
		Ok(BrowseSession {
			table: table.to_string(),
			page_size,
			columns: result.columns,
			loaded: rows.len(),
			rows,
			total,
			has_more,
		})
	}

	/// Fetch the next page and append it.
	///
	/// A no-op success when every row is already loaded.
	#[instrument(name = "browse::load_more", level = "debug", skip(self, store), fields(table = %self.table))]
	pub fn load_more(&mut self, store: &Store) -> Result<()> {
		if !self.has_more {
			return Ok(());
		}

		let result = store.execute(&format!(
			"SELECT * FROM {} LIMIT {} OFFSET {}",
			self.table,
			self.page_size + 1,
			self.loaded
		))?;
		let mut rows = result.rows;
		let has_more = rows.len() > self.page_size;
		if has_more {
			rows.truncate(self.page_size);
		}

		self.loaded += rows.len();
		self.rows.extend(rows);
		self.has_more = has_more;
		debug!(loaded = self.loaded, total = self.total, has_more, "loaded page");
		Ok(())
	}

	/// Fetch every remaining row in a single query.
	#[instrument(name = "browse::load_all", level = "debug", skip(self, store), fields(table = %self.table))]
	pub fn load_all(&mut self, store: &Store) -> Result<()> {
		let remaining = self.total.saturating_sub(self.loaded);
		let result = store
			.execute(&format!("SELECT * FROM {} LIMIT {} OFFSET {}", self.table, remaining, self.loaded))?;

		self.rows.extend(result.rows);
		self.loaded = self.total;
		self.has_more = false;
		debug!(loaded = self.loaded, "loaded all rows");
		Ok(())
	}

	pub fn table_name(&self) -> &str {
		&self.table
	}

	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	pub fn rows(&self) -> &[Vec<Value>] {
		&self.rows
	}

	pub fn loaded_count(&self) -> usize {
		self.loaded
	}

	pub fn total_count(&self) -> usize {
		self.total
	}

	pub fn has_more(&self) -> bool {
		self.has_more
	}
}

fn count_rows(store: &Store, table: &str) -> Result<usize> {
	let result = store.execute(&format!("SELECT COUNT(*) FROM {}", table))?;
	match result.rows.first().and_then(|row| row.first()) {
		Some(Value::Int(count)) => Ok(*count as usize),
		_ => Err(Error::query(format!("count query for table {} returned no rows", table))),
	}
}

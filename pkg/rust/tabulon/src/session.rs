// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

use tabulon_browse::{BrowseSession, DEFAULT_PAGE_SIZE};
use tabulon_catalog::{TableSchema, infer_relationships};
use tabulon_sandbox::{ChartSpec, Outcome, Sandbox, SandboxConfig};
use tabulon_store::{Store, synthesize};
use tabulon_type::{Error, QueryResult, Result, TabularInput};
use tracing::{debug, instrument};

/// One user-facing exploration session over a single loaded dataset.
///
/// The session owns the live store handle; loading a dataset replaces it
/// wholesale along with all derived state. Queries run serially — the
/// session is a single logical caller and is not designed for concurrent
/// mutation.
pub struct Session {
	store: Option<Store>,
	schemas: Vec<TableSchema>,
	browse: Option<BrowseSession>,
	page_size: usize,
	sandbox: Sandbox,
}

impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}

impl Session {
	pub fn new() -> Self {
		Self {
			store: None,
			schemas: Vec::new(),
			browse: None,
			page_size: DEFAULT_PAGE_SIZE,
			sandbox: Sandbox::default(),
		}
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	pub fn with_sandbox_config(mut self, config: SandboxConfig) -> Self {
		self.sandbox = Sandbox::new(config);
		self
	}

	/// Load a dataset, replacing whatever was loaded before.
	///
	/// The old store, browse state and derived schemas are discarded up
	/// front: if ingestion fails the session holds no dataset at all, and
	/// the caller retries from scratch rather than falling back to a
	/// half-loaded state.
	#[instrument(name = "session::load_dataset", level = "debug", skip_all, fields(tables = input.tables.len()))]
	pub fn load_dataset(&mut self, input: &TabularInput) -> Result<()> {
		self.store = None;
		self.schemas.clear();
		self.browse = None;

		let schema = synthesize(input)?;
		let store = Store::load(&schema)?;
		self.schemas = infer_relationships(&store)?;
		self.store = Some(store);

		debug!(tables = self.schemas.len(), "dataset loaded");
		Ok(())
	}

	pub fn is_ready(&self) -> bool {
		self.store.is_some()
	}

	/// Execute a read query — user-authored or collaborator-generated SQL
	/// runs verbatim.
	pub fn execute(&self, sql: &str) -> Result<QueryResult> {
		self.store()?.execute(sql)
	}

	/// Full DDL text of the loaded dataset, as handed to the SQL
	/// generation collaborator.
	pub fn schema_ddl(&self) -> Result<&str> {
		Ok(self.store()?.ddl())
	}

	/// Derived per-table schemas with inferred relationships, for UI
	/// consumption.
	pub fn table_schemas(&self) -> &[TableSchema] {
		&self.schemas
	}

	pub fn table_names(&self) -> Result<&[String]> {
		Ok(self.store()?.table_names())
	}

	/// Select a table for browsing, replacing any prior browse session.
	pub fn select_table(&mut self, table: &str) -> Result<&BrowseSession> {
		self.browse = None;
		let session = BrowseSession::select(self.store()?, table, self.page_size)?;
		Ok(self.browse.insert(session))
	}

	/// Load the next page of the browsed table.
	pub fn load_more(&mut self) -> Result<&BrowseSession> {
		let store = self.store.as_ref().ok_or_else(no_dataset)?;
		let browse = self.browse.as_mut().ok_or_else(no_selection)?;
		browse.load_more(store)?;
		Ok(browse)
	}

	/// Load every remaining row of the browsed table.
	pub fn load_all(&mut self) -> Result<&BrowseSession> {
		let store = self.store.as_ref().ok_or_else(no_dataset)?;
		let browse = self.browse.as_mut().ok_or_else(no_selection)?;
		browse.load_all(store)?;
		Ok(browse)
	}

	pub fn browse(&self) -> Option<&BrowseSession> {
		self.browse.as_ref()
	}

	/// Run a transformation script against a query result and validate the
	/// returned chart descriptor.
	///
	/// Failures are never retried here; callers may regenerate the script
	/// through the generation collaborator and resubmit.
	pub fn visualize(&self, script: &str, result: &QueryResult) -> Result<ChartSpec> {
		match self.sandbox.run(script, &result.columns, &result.rows) {
			Outcome::Success(value) => ChartSpec::from_value(value),
			Outcome::ScriptError(message) => Err(Error::Script {
				message,
			}),
			Outcome::Timeout => Err(Error::ScriptTimeout {
				timeout_ms: self.sandbox.timeout().as_millis() as u64,
			}),
		}
	}

	fn store(&self) -> Result<&Store> {
		self.store.as_ref().ok_or_else(no_dataset)
	}
}

fn no_dataset() -> Error {
	Error::query("no dataset loaded")
}

fn no_selection() -> Error {
	Error::query("no table selected")
}

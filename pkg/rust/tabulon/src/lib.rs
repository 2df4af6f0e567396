// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! Tabulon: an embedded analytical engine for conversational data
//! exploration.
//!
//! The [`Session`] facade ties the pieces together: schema synthesis and the
//! embedded relational store, foreign-key inference, paginated browsing and
//! the sandboxed visualization host. [`generate`] carries the serde boundary
//! types for the external SQL/script generation collaborator.

pub mod generate;
mod session;

pub use session::Session;
pub use tabulon_browse::{BrowseSession, DEFAULT_PAGE_SIZE};
pub use tabulon_catalog::{ColumnMeta, Reference, TableSchema, infer_relationships, reference_for};
pub use tabulon_sandbox::{ChartSpec, Outcome, Sandbox, SandboxConfig};
pub use tabulon_store::{
	InferredColumn, InferredTable, InsertPlan, PhysicalColumn, Store, SynthesizedSchema, synthesize,
};
pub use tabulon_type::{ColumnType, Error, QueryResult, Result, TableData, TabularInput, Value};

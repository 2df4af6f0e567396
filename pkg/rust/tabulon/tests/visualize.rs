// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

use std::time::Duration;

use tabulon::{Error, SandboxConfig, Session, generate::strip_code_fences};
use tabulon_testing::retail_dataset;

// Builds a fixed chart descriptor (58 bytes at offset 1024).
const CHART_SCRIPT: &str = r#"(module
	(memory (export "memory") 1)
	(data (i32.const 1024) "{\"data\":[{\"type\":\"bar\"}],\"layout\":{\"title\":\"By category\"}}")
	(func (export "alloc") (param i32) (result i32) (i32.const 4096))
	(func (export "run") (param i32 i32) (result i64)
		(i64.or (i64.shl (i64.const 1024) (i64.const 32)) (i64.const 58))))"#;

// Completes but returns a value without the required layout field.
const SHAPELESS_SCRIPT: &str = r#"(module
	(memory (export "memory") 1)
	(data (i32.const 1024) "{\"data\":[]}")
	(func (export "alloc") (param i32) (result i32) (i32.const 4096))
	(func (export "run") (param i32 i32) (result i64)
		(i64.or (i64.shl (i64.const 1024) (i64.const 32)) (i64.const 11))))"#;

const TRAP_SCRIPT: &str = r#"(module
	(memory (export "memory") 1)
	(func (export "alloc") (param i32) (result i32) (i32.const 1024))
	(func (export "run") (param i32 i32) (result i64) unreachable))"#;

const LOOP_SCRIPT: &str = r#"(module
	(memory (export "memory") 1)
	(func (export "alloc") (param i32) (result i32) (i32.const 1024))
	(func (export "run") (param i32 i32) (result i64)
		(loop $forever (br $forever))
		(i64.const 0)))"#;

fn session() -> Session {
	let mut session = Session::new().with_sandbox_config(SandboxConfig {
		timeout: Duration::from_millis(250),
		..SandboxConfig::default()
	});
	session.load_dataset(&retail_dataset()).unwrap();
	session
}

#[test]
fn test_visualize_returns_chart() {
	let session = session();
	let result = session.execute("SELECT category, COUNT(*) FROM products GROUP BY category").unwrap();

	let chart = session.visualize(CHART_SCRIPT, &result).unwrap();
	assert_eq!(chart.data[0]["type"], "bar");
	assert_eq!(chart.layout["title"], "By category");
}

#[test]
fn test_shape_violation_is_distinct_from_script_error() {
	let session = session();
	let result = session.execute("SELECT id FROM products").unwrap();

	let err = session.visualize(SHAPELESS_SCRIPT, &result).unwrap_err();
	assert!(matches!(err, Error::ChartShape { field: "layout" }), "{err}");
}

#[test]
fn test_trapping_script_is_script_error() {
	let session = session();
	let result = session.execute("SELECT id FROM products").unwrap();

	let err = session.visualize(TRAP_SCRIPT, &result).unwrap_err();
	assert!(matches!(err, Error::Script { .. }), "{err}");
}

#[test]
fn test_looping_script_times_out() {
	let session = session();
	let result = session.execute("SELECT id FROM products").unwrap();

	let err = session.visualize(LOOP_SCRIPT, &result).unwrap_err();
	assert!(matches!(err, Error::ScriptTimeout { timeout_ms: 250 }), "{err}");
}

#[test]
fn test_generated_script_is_fence_stripped_before_execution() {
	let session = session();
	let result = session.execute("SELECT id FROM products LIMIT 1").unwrap();

	let response = format!("```wat\n{}\n```", CHART_SCRIPT);
	let chart = session.visualize(strip_code_fences(&response), &result).unwrap();
	assert_eq!(chart.data[0]["type"], "bar");
}

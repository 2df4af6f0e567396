// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

//! Sandbox execution host for untrusted transformation scripts.
//!
//! Scripts are WebAssembly modules (text or binary). Every invocation gets a
//! freshly created engine and store that are destroyed afterwards, so no
//! state or capability acquired by one script can leak into the next. No host
//! functions are linked and WASI is never provided: a module importing any
//! external capability fails at instantiation instead of being denied at call
//! time. A watchdog thread races execution against the deadline; whichever
//! resolves first wins and the loser's effect is discarded.

use std::{sync::mpsc, thread, time::Duration};

use serde_json::json;
use tabulon_type::Value;
use tracing::{debug, instrument};
use wasmtime::{Config, Engine, Linker, Module, Store, StoreLimits, StoreLimitsBuilder, Trap};

/// Result of one sandbox invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
	/// The script ran to completion and returned a value. The shape of
	/// the value is not interpreted here; see `ChartSpec::from_value`.
	Success(serde_json::Value),
	/// The script trapped, failed to link, or returned malformed output.
	ScriptError(String),
	/// The deadline elapsed before the script posted a result.
	Timeout,
}

#[derive(Clone, Debug)]
pub struct SandboxConfig {
	/// Hard deadline per invocation.
	pub timeout: Duration,
	/// Cap on guest linear memory.
	pub max_memory_bytes: usize,
}

impl Default for SandboxConfig {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(5),
			max_memory_bytes: 64 << 20,
		}
	}
}

/// The sandbox execution host. Holds only configuration; every `run` builds
/// and tears down its own isolated execution context.
#[derive(Clone, Debug, Default)]
pub struct Sandbox {
	config: SandboxConfig,
}

impl Sandbox {
	pub fn new(config: SandboxConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn timeout(&self) -> Duration {
		self.config.timeout
	}

	/// Execute a script against a query result.
	///
	/// The only inputs available to the script are `columns` and `rows`,
	/// delivered as one JSON document through the guest ABI:
	/// `alloc(len) -> ptr` to reserve input space, then
	/// `run(ptr, len) -> i64` returning pointer (high 32 bits) and length
	/// (low 32 bits) of the UTF-8 JSON result.
	///
	/// The call blocks until one of the three outcomes is resolved. Failed
	/// or timed-out scripts are never retried here; retry is a caller
	/// decision.
	#[instrument(name = "sandbox::run", level = "debug", skip_all, fields(
		script_len = script.len(),
		rows = rows.len(),
		timeout_ms = self.config.timeout.as_millis() as u64
	))]
	pub fn run(&self, script: &str, columns: &[String], rows: &[Vec<Value>]) -> Outcome {
		let mut config = Config::new();
		config.epoch_interruption(true);

		let engine = match Engine::new(&config) {
			Ok(engine) => engine,
			Err(e) => return Outcome::ScriptError(e.to_string()),
		};

		let module = match Module::new(&engine, script) {
			Ok(module) => module,
			Err(e) => return Outcome::ScriptError(e.to_string()),
		};

		let input = match serde_json::to_vec(&json!({ "columns": columns, "rows": rows })) {
			Ok(bytes) => bytes,
			Err(e) => return Outcome::ScriptError(e.to_string()),
		};

		// The watchdog bumps the engine epoch once the deadline passes,
		// unless execution finishes first and cancels it through the
		// channel. A late epoch bump against an already-dropped store is
		// harmless, so both sides of the race can lose safely.
		let (done, deadline) = mpsc::channel::<()>();
		let watchdog_engine = engine.clone();
		let timeout = self.config.timeout;
		let watchdog = thread::spawn(move || {
			if deadline.recv_timeout(timeout).is_err() {
				watchdog_engine.increment_epoch();
			}
		});

		let outcome = self.invoke(&engine, &module, &input);

		let _ = done.send(());
		let _ = watchdog.join();

		debug!(timed_out = matches!(outcome, Outcome::Timeout), "sandbox invocation finished");
		outcome
	}

	fn invoke(&self, engine: &Engine, module: &Module, input: &[u8]) -> Outcome {
		let limits = StoreLimitsBuilder::new().memory_size(self.config.max_memory_bytes).build();
		let mut store: Store<StoreLimits> = Store::new(engine, limits);
		store.limiter(|limits| limits);
		// Trap as soon as the watchdog bumps the epoch.
		store.set_epoch_deadline(1);

		// Nothing is registered in the linker: imports of network,
		// storage, clock or environment capabilities cannot resolve.
		let linker: Linker<StoreLimits> = Linker::new(engine);
		let instance = match linker.instantiate(&mut store, module) {
			Ok(instance) => instance,
			Err(e) => return classify(e),
		};

		let memory = match instance.get_memory(&mut store, "memory") {
			Some(memory) => memory,
			None => return Outcome::ScriptError("script does not export `memory`".to_string()),
		};
		let alloc = match instance.get_typed_func::<i32, i32>(&mut store, "alloc") {
			Ok(func) => func,
			Err(e) => return Outcome::ScriptError(e.to_string()),
		};
		let run = match instance.get_typed_func::<(i32, i32), i64>(&mut store, "run") {
			Ok(func) => func,
			Err(e) => return Outcome::ScriptError(e.to_string()),
		};

		let ptr = match alloc.call(&mut store, input.len() as i32) {
			Ok(ptr) => ptr,
			Err(e) => return classify(e),
		};
		if let Err(e) = memory.write(&mut store, ptr as u32 as usize, input) {
			return Outcome::ScriptError(e.to_string());
		}

		let packed = match run.call(&mut store, (ptr, input.len() as i32)) {
			Ok(packed) => packed,
			Err(e) => return classify(e),
		};

		let out_ptr = (packed as u64 >> 32) as usize;
		let out_len = (packed as u64 & 0xffff_ffff) as usize;
		let mut output = vec![0u8; out_len];
		if let Err(e) = memory.read(&store, out_ptr, &mut output) {
			return Outcome::ScriptError(e.to_string());
		}

		match serde_json::from_slice(&output) {
			Ok(value) => Outcome::Success(value),
			Err(e) => Outcome::ScriptError(format!("script returned invalid JSON: {}", e)),
		}
	}
}

/// An epoch trap is the deadline firing; everything else is a script failure.
fn classify(error: wasmtime::Error) -> Outcome {
	match error.downcast_ref::<Trap>() {
		Some(Trap::Interrupt) => Outcome::Timeout,
		_ => Outcome::ScriptError(error.to_string()),
	}
}

// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

mod chart;
mod host;

pub use chart::ChartSpec;
pub use host::{Outcome, Sandbox, SandboxConfig};

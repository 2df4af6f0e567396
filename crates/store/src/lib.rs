// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

mod store;
mod synth;

pub use store::{PhysicalColumn, Store};
pub use synth::{InferredColumn, InferredTable, InsertPlan, SynthesizedSchema, synthesize};

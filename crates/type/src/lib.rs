// Copyright (c) tabulon.dev 2026
// This file is licensed under the MIT, see license.md file

pub mod error;
mod tabular;
mod value;

pub use error::{Error, Result};
pub use tabular::{QueryResult, TableData, TabularInput};
pub use value::{ColumnType, Value};

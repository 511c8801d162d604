//! Core contracts and helpers for nulldb.
//!
//! This crate defines the canonical schema types, the native type
//! mapping, and validation helpers shared by adapters.

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;
pub mod value;

pub use error::{Error, Result};
pub use schema::{Column, ColumnDefinition, TableDefinition};
pub use types::{ColumnKind, NativeType, native_type};
pub use validation::validate_tables;
pub use value::Value;

//! Documentation generation for the configuration schema.
//!
//! Derives a JSON Schema from the Rust configuration types and renders a
//! markdown reference of every section from it.

mod markdown;
mod schema;

pub use markdown::{generate_property_table, generate_reference};
pub use schema::{PropertyInfo, config_schema, extract_property_info, resolve_ref};

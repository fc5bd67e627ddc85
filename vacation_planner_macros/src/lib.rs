mod payload_schema;
mod schema_extraction;

use proc_macro::TokenStream;

/// Attaches a cached JSON Schema to a payload struct.
///
/// The struct must also derive `schemars::JsonSchema`. The generated impl of
/// `vacation_planner::schema::PayloadSchema` builds the schema once per
/// process and hands out a shared `SchemaHandle`.
///
/// Accepts optional `name = "..."` and `description = "..."` arguments; the
/// description defaults to the struct's doc comment.
#[proc_macro_attribute]
pub fn payload_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    payload_schema::payload_schema(attr, item)
}

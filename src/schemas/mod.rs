pub mod schema;
pub mod validation;

pub use schema::{apply_doc_comments, schema_type_name, PayloadSchema, SchemaHandle};
pub use validation::{validate_payload, FieldIssue};

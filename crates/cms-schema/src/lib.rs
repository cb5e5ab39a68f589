pub mod error;
pub mod inspector;
pub mod registry;

pub use error::SchemaError;
pub use inspector::{ContentTypeDescription, describe_content_type, inspect_content_type};
pub use registry::EditorRegistry;

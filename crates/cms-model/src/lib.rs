pub mod error;
pub mod fields;
pub mod mapping;
pub mod outcome;
pub mod repository;
pub mod schema;
pub mod value;

pub use error::MappingError;
pub use fields::{EditorKind, FieldDescriptor, GeoComponent, LocaleVariant, PropertyGroup};
pub use mapping::{ColumnMapping, FieldBinding, ImportRequest, TITLE_ALIAS};
pub use outcome::{ImportOutcome, RowStatus};
pub use repository::{
    ContentHandle, ContentRepository, EditorConfig, EditorConfigProvider, LocalizationProvider,
};
pub use schema::{ContentTypeSchema, Language, PropertyGroupSchema, PropertySchema};
pub use value::{Assignment, FieldValue};

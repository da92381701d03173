pub mod field_path;
pub mod violation;

pub use field_path::{FieldPath, FieldPathParseError, FieldPathSegment};
pub use violation::Violation;

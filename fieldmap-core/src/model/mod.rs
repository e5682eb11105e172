mod field_collection_error;
pub mod field;
pub mod player;

pub use field_collection_error::FieldCollectionError;

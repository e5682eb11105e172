use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldCollectionError {
    #[error("field name '{name}' appears more than once (rows {first} and {second})")]
    DuplicateFieldName {
        name: String,
        first: usize,
        second: usize,
    },
}

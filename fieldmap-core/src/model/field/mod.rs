mod field_criteria;
mod field_options;
mod field_record;

pub use field_criteria::FieldCriteria;
pub use field_options::FieldOptions;
pub use field_record::{validate_unique_field_names, FieldRecord};

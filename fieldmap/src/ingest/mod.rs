mod field_row;
mod ingest_error;
pub mod ingest_ops;
mod player_row;
pub mod race_list_ops;
pub mod value_ops;

pub use field_row::FieldRow;
pub use ingest_error::IngestError;
pub use player_row::PlayerRow;

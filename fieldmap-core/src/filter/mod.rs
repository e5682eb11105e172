mod field_filter;
pub mod filter_ops;
mod label_set;
mod player_filter;

pub use field_filter::FieldFilter;
pub use filter_ops::{apply_field_filters, apply_player_filters};
pub use label_set::LabelSet;
pub use player_filter::PlayerFilter;

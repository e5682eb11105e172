mod app_error;
pub mod app_ops;
mod fieldmap_cli;
pub mod filter;
pub mod groups;
pub mod options;
pub mod recommend;

pub use app_error::FieldMapAppError;
pub use fieldmap_cli::{FieldMapCliArguments, FieldMapOperation};

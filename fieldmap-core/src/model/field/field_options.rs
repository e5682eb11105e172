use super::FieldRecord;
use crate::util::label_ops;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// the distinct values available for each field criterion
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldOptions {
    pub capacity: Vec<i64>,
    pub surface: Vec<String>,
    pub size: Vec<String>,
    pub game_size: Vec<String>,
    pub lights: Vec<String>,
    pub permanent_lines: Vec<String>,
    pub goals: Vec<String>,
}

impl FieldOptions {
    pub fn from_records(fields: &[FieldRecord]) -> FieldOptions {
        FieldOptions {
            capacity: fields
                .iter()
                .filter_map(|f| f.capacity)
                .unique()
                .sorted()
                .collect_vec(),
            surface: label_ops::distinct_labels(fields.iter().map(|f| f.surface.as_deref())),
            size: label_ops::distinct_labels(fields.iter().map(|f| f.size.as_deref())),
            game_size: label_ops::distinct_labels(fields.iter().map(|f| f.game_size.as_deref())),
            lights: label_ops::distinct_labels(fields.iter().map(|f| f.lights.as_deref())),
            permanent_lines: label_ops::distinct_labels(
                fields.iter().map(|f| f.permanent_lines.as_deref()),
            ),
            goals: label_ops::distinct_labels(fields.iter().map(|f| f.goals.as_deref())),
        }
    }
}

use crate::{model::FieldCollectionError, util::geo_ops};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a playing field (pitch) that may be recommended to a group of players
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FieldRecord {
    /// unique within a field collection, used to key distance results
    pub name: String,
    pub capacity: Option<i64>,
    pub surface: Option<String>,
    pub size: Option<String>,
    pub game_size: Option<String>,
    pub lights: Option<String>,
    pub permanent_lines: Option<String>,
    pub goals: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl FieldRecord {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> FieldRecord {
        FieldRecord {
            name: String::from(name),
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }

    /// the field location, or None if either coordinate is missing
    pub fn location(&self) -> Option<Point<f64>> {
        geo_ops::to_point(self.latitude, self.longitude)
    }
}

/// confirms that no two fields in the collection share a name.
///
/// # Arguments
///
/// * `fields` - field collection in source order
///
/// # Returns
///
/// * an error naming the first duplicate found along with both row indices
pub fn validate_unique_field_names(fields: &[FieldRecord]) -> Result<(), FieldCollectionError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(fields.len());
    for (idx, field) in fields.iter().enumerate() {
        if let Some(first) = seen.insert(field.name.as_str(), idx) {
            return Err(FieldCollectionError::DuplicateFieldName {
                name: field.name.clone(),
                first,
                second: idx,
            });
        }
    }
    Ok(())
}

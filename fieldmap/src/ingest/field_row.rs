use super::value_ops;
use fieldmap_core::model::field::FieldRecord;
use serde::{Deserialize, Serialize};

/// a row of the cleaned field inventory export.
///
/// Name,Capacity,Surface,Size,Game Size,Lights,Permanent Lines,Goals,Latitude,Longitude
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FieldRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Capacity", default)]
    pub capacity: Option<String>,
    #[serde(rename = "Surface", default)]
    pub surface: Option<String>,
    #[serde(rename = "Size", default)]
    pub size: Option<String>,
    #[serde(rename = "Game Size", default)]
    pub game_size: Option<String>,
    #[serde(rename = "Lights", default)]
    pub lights: Option<String>,
    #[serde(rename = "Permanent Lines", default)]
    pub permanent_lines: Option<String>,
    #[serde(rename = "Goals", default)]
    pub goals: Option<String>,
    #[serde(
        rename = "Latitude",
        alias = "latitude",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub latitude: Option<f64>,
    #[serde(
        rename = "Longitude",
        alias = "longitude",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub longitude: Option<f64>,
}

impl FieldRow {
    /// builds a typed field record, or an error message when the row has no name
    pub fn into_record(self, row: usize) -> Result<FieldRecord, String> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| format!("field row {row} has no name"))?;
        let capacity = self.capacity.as_deref().and_then(|c| {
            let parsed = value_ops::parse_integer(c);
            if parsed.is_none() && !c.trim().is_empty() {
                log::warn!("field '{name}' has non-integer capacity '{c}'");
            }
            parsed
        });
        let (latitude, longitude) =
            value_ops::validate_coordinates(self.latitude, self.longitude).unwrap_or_else(|e| {
                log::warn!("field '{name}' location dropped: {e}");
                (None, None)
            });
        Ok(FieldRecord {
            name,
            capacity,
            surface: self.surface,
            size: self.size,
            game_size: self.game_size,
            lights: self.lights,
            permanent_lines: self.permanent_lines,
            goals: self.goals,
            latitude,
            longitude,
        })
    }
}

impl From<&FieldRecord> for FieldRow {
    fn from(value: &FieldRecord) -> Self {
        FieldRow {
            name: Some(value.name.clone()),
            capacity: value.capacity.map(|c| c.to_string()),
            surface: value.surface.clone(),
            size: value.size.clone(),
            game_size: value.game_size.clone(),
            lights: value.lights.clone(),
            permanent_lines: value.permanent_lines.clone(),
            goals: value.goals.clone(),
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

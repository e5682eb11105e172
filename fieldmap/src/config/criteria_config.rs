use super::ConfigurationError;
use fieldmap_core::model::{field::FieldCriteria, player::PlayerCriteria};
use serde::{Deserialize, Serialize};

/// the filter selections for one run, read from a TOML or JSON file with
/// optional `players` and `fields` sections. any key may be omitted.
///
/// ```toml
/// [players]
/// program = ["Travel"]
/// age = [9, 10]
/// gender = "female"
///
/// [fields]
/// surface = ["grass"]
/// lights = "yes"
/// ```
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CriteriaConfig {
    pub players: PlayerCriteria,
    pub fields: FieldCriteria,
}

impl TryFrom<&String> for CriteriaConfig {
    type Error = ConfigurationError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = |f: &String| {
            std::fs::read_to_string(f).map_err(|source| ConfigurationError::ReadError {
                filepath: f.clone(),
                source,
            })
        };
        let decode_error = |msg: String| ConfigurationError::DecodeError {
            filepath: f.clone(),
            msg,
        };
        if f.ends_with(".toml") {
            let s = read(f)?;
            toml::from_str(&s).map_err(|e| decode_error(e.to_string()))
        } else if f.ends_with(".json") {
            let s = read(f)?;
            serde_json::from_str(&s).map_err(|e| decode_error(e.to_string()))
        } else {
            Err(ConfigurationError::UnsupportedFileType(f.clone()))
        }
    }
}

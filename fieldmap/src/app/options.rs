use super::{app_ops, FieldMapAppError};
use fieldmap_core::model::{field::FieldOptions, player::PlayerOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// the selectable values for every player and field criterion
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OptionsOutput {
    pub players: PlayerOptions,
    pub fields: FieldOptions,
}

pub fn run(players_file: &Path, fields_file: &Path) -> Result<String, FieldMapAppError> {
    let inputs = app_ops::read_inputs_today(players_file, fields_file)?;
    let output = OptionsOutput {
        players: PlayerOptions::from_records(&inputs.players),
        fields: FieldOptions::from_records(&inputs.fields),
    };
    let json = serde_json::to_string_pretty(&output)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::super::app_ops::test_resources::*;
    use super::*;

    #[test]
    fn test_options_from_resources() {
        let json = run(&resource("test_players.csv"), &resource("test_fields.csv"))
            .unwrap_or_else(|e| panic!("{e}"));
        let output: OptionsOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(
            output.players.program,
            vec!["pta fall", "rec fall 24", "travel"]
        );
        // the unparseable age in the roster is absent from the options
        assert_eq!(output.players.age, vec![9, 10, 11]);
        assert_eq!(output.players.gender, vec!["female", "male"]);
        assert_eq!(
            output.players.race,
            vec!["asian", "black", "hispanic", "white"]
        );
        assert_eq!(output.fields.capacity, vec![1, 2]);
        assert_eq!(output.fields.surface, vec!["grass", "turf"]);
        assert_eq!(output.fields.lights, vec!["no", "yes"]);
    }
}

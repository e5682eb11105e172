use super::FieldMapAppError;
use crate::{config::CriteriaConfig, ingest::ingest_ops};
use chrono::{Local, NaiveDate};
use fieldmap_core::{
    filter,
    model::{field::FieldRecord, player::PlayerRecord},
};
use std::path::Path;

/// the two input tables of a run
pub struct FieldMapInputs {
    pub players: Vec<PlayerRecord>,
    pub fields: Vec<FieldRecord>,
}

/// reads the player roster and field inventory. ages missing from the roster
/// are derived from birth dates as of `today`.
pub fn read_inputs(
    players_file: &Path,
    fields_file: &Path,
    today: NaiveDate,
) -> Result<FieldMapInputs, FieldMapAppError> {
    let players = ingest_ops::read_players(players_file, today)?;
    let fields = ingest_ops::read_fields(fields_file)?;
    Ok(FieldMapInputs { players, fields })
}

/// reads the inputs as of the current local date
pub fn read_inputs_today(
    players_file: &Path,
    fields_file: &Path,
) -> Result<FieldMapInputs, FieldMapAppError> {
    read_inputs(players_file, fields_file, Local::now().date_naive())
}

/// reads the criteria file, if any. without one, every criterion is empty and
/// the filters select nothing.
pub fn read_criteria(criteria_file: Option<&String>) -> Result<CriteriaConfig, FieldMapAppError> {
    match criteria_file {
        Some(f) => {
            let criteria = CriteriaConfig::try_from(f)?;
            log::debug!("criteria from {f}: {criteria:?}");
            Ok(criteria)
        }
        None => {
            log::warn!("no criteria file provided, player and field selections will be empty");
            Ok(CriteriaConfig::default())
        }
    }
}

/// applies the player and field criteria, returning the filtered subsets
pub fn apply_criteria(
    inputs: &FieldMapInputs,
    criteria: &CriteriaConfig,
) -> (Vec<PlayerRecord>, Vec<FieldRecord>) {
    let players = filter::apply_player_filters(&inputs.players, &criteria.players);
    let fields = filter::apply_field_filters(&inputs.fields, &criteria.fields);
    log::info!(
        "selected {}/{} players and {}/{} fields",
        players.len(),
        inputs.players.len(),
        fields.len(),
        inputs.fields.len()
    );
    (players, fields)
}


#[cfg(test)]
mod tests {
    use super::test_resources::*;
    use super::*;

    #[test]
    fn test_missing_criteria_selects_nothing() {
        let inputs = read_inputs_today(
            &resource("test_players.csv"),
            &resource("test_fields.csv"),
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let criteria = read_criteria(None).unwrap_or_else(|e| panic!("{e}"));
        let (players, fields) = apply_criteria(&inputs, &criteria);
        assert!(players.is_empty());
        assert!(fields.is_empty());
    }

    #[test]
    fn test_apply_toml_criteria() {
        let inputs = read_inputs_today(
            &resource("test_players.csv"),
            &resource("test_fields.csv"),
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let criteria = read_criteria(Some(&resource_string("test_criteria.toml")))
            .unwrap_or_else(|e| panic!("{e}"));
        let (players, fields) = apply_criteria(&inputs, &criteria);
        assert_eq!(players.len(), 3);
        let names = fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Turtle Park", "Jelleff"]);
    }
}

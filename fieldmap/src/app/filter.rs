use super::{app_ops, FieldMapAppError};
use crate::ingest::ingest_ops;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PLAYERS_FILENAME: &str = "players.csv";
pub const FIELDS_FILENAME: &str = "fields.csv";

/// summary of the filter operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FilterOutput {
    pub players_file: String,
    pub player_count: usize,
    pub fields_file: String,
    pub field_count: usize,
}

/// filters the inputs and writes the subsets to `output_directory` as
/// players.csv and fields.csv, in the same layout the inputs are read from.
pub fn run(
    players_file: &Path,
    fields_file: &Path,
    criteria_file: Option<&String>,
    output_directory: &Path,
) -> Result<String, FieldMapAppError> {
    let inputs = app_ops::read_inputs_today(players_file, fields_file)?;
    let criteria = app_ops::read_criteria(criteria_file)?;
    let (players, fields) = app_ops::apply_criteria(&inputs, &criteria);

    std::fs::create_dir_all(output_directory).map_err(|e| {
        FieldMapAppError::OutputDirectoryError(output_directory.to_string_lossy().to_string(), e)
    })?;
    let players_out = output_directory.join(PLAYERS_FILENAME);
    let fields_out = output_directory.join(FIELDS_FILENAME);
    ingest_ops::write_players(&players_out, &players)?;
    ingest_ops::write_fields(&fields_out, &fields)?;
    log::info!(
        "wrote {} players to {} and {} fields to {}",
        players.len(),
        players_out.display(),
        fields.len(),
        fields_out.display()
    );

    let output = FilterOutput {
        players_file: players_out.to_string_lossy().to_string(),
        player_count: players.len(),
        fields_file: fields_out.to_string_lossy().to_string(),
        field_count: fields.len(),
    };
    let json = serde_json::to_string_pretty(&output)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::super::app_ops::test_resources::*;
    use super::*;
    use chrono::Local;

    #[test]
    fn test_filter_writes_subsets() {
        let out_dir = std::env::temp_dir().join(format!(
            "fieldmap_test_filter_writes_subsets_{}",
            std::process::id()
        ));
        let json = run(
            &resource("test_players.csv"),
            &resource("test_fields.csv"),
            Some(&resource_string("test_criteria.toml")),
            &out_dir,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let output: FilterOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output.player_count, 3);
        assert_eq!(output.field_count, 2);

        let today = Local::now().date_naive();
        let players = ingest_ops::read_players(&out_dir.join(PLAYERS_FILENAME), today)
            .unwrap_or_else(|e| panic!("{e}"));
        let fields = ingest_ops::read_fields(&out_dir.join(FIELDS_FILENAME))
            .unwrap_or_else(|e| panic!("{e}"));
        std::fs::remove_dir_all(&out_dir)
            .unwrap_or_else(|e| panic!("failed removing {out_dir:?}: {e}"));

        assert_eq!(players.len(), 3);
        assert!(players
            .iter()
            .all(|p| p.program.as_deref() == Some("Travel")));
        assert_eq!(fields[0].name, "Turtle Park");
        assert_eq!(fields[1].name, "Jelleff");
    }
}

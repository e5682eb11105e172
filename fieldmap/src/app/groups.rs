use super::{app_ops, FieldMapAppError};
use fieldmap_core::recommend::{self, GroupRecommendation, PlayerGrouping};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// the printed result of the groups operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupsOutput {
    pub grouping: PlayerGrouping,
    pub groups: Vec<GroupRecommendation>,
}

pub fn run(
    players_file: &Path,
    fields_file: &Path,
    criteria_file: Option<&String>,
    grouping: PlayerGrouping,
) -> Result<String, FieldMapAppError> {
    let inputs = app_ops::read_inputs_today(players_file, fields_file)?;
    let criteria = app_ops::read_criteria(criteria_file)?;
    let output = groups_from(&inputs, &criteria, grouping);
    let json = serde_json::to_string_pretty(&output)?;
    Ok(json)
}

pub fn groups_from(
    inputs: &app_ops::FieldMapInputs,
    criteria: &crate::config::CriteriaConfig,
    grouping: PlayerGrouping,
) -> GroupsOutput {
    let (players, fields) = app_ops::apply_criteria(inputs, criteria);
    let groups = recommend::find_optimal_field_by_group(&players, &fields, grouping);
    for group in groups.iter() {
        match &group.recommendation {
            Some(r) => log::info!("{grouping} {}: {r}", group.group),
            None => log::info!("{grouping} {}: no recommendation available", group.group),
        }
    }
    GroupsOutput { grouping, groups }
}

#[cfg(test)]
mod tests {
    use super::super::app_ops::test_resources::*;
    use super::*;
    use fieldmap_core::recommend::GroupKey;

    fn inputs() -> app_ops::FieldMapInputs {
        app_ops::read_inputs_today(&resource("test_players.csv"), &resource("test_fields.csv"))
            .unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_groups_by_school() {
        let criteria = app_ops::read_criteria(Some(&resource_string("test_criteria.toml")))
            .unwrap_or_else(|e| panic!("{e}"));
        let output = groups_from(&inputs(), &criteria, PlayerGrouping::School);
        let keys = output.groups.iter().map(|g| g.group.clone()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                GroupKey::Label(String::from("janney elementary")),
                GroupKey::Label(String::from("lafayette elementary")),
            ]
        );
        assert_eq!(output.groups[0].player_count, 2);
        assert_eq!(
            output.groups[0]
                .recommendation
                .as_ref()
                .map(|r| r.field_name.as_str()),
            Some("Turtle Park")
        );
        // the only lafayette player has no usable location
        assert_eq!(output.groups[1].player_count, 1);
        assert!(output.groups[1].recommendation.is_none());
    }

    #[test]
    fn test_groups_by_age_serialize() {
        let json = run(
            &resource("test_players.csv"),
            &resource("test_fields.csv"),
            Some(&resource_string("test_criteria.toml")),
            PlayerGrouping::Age,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let output: GroupsOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output.grouping, PlayerGrouping::Age);
        let keys = output.groups.iter().map(|g| g.group.clone()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![GroupKey::Number(9), GroupKey::Number(10), GroupKey::Number(11)]
        );
    }
}

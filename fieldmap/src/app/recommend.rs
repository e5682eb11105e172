use super::{app_ops, FieldMapAppError};
use fieldmap_core::recommend::{self, FieldRecommendation};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// the printed result of the recommend operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecommendOutput {
    pub player_count: usize,
    pub field_count: usize,
    pub recommendation: Option<FieldRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Vec<FieldRecommendation>>,
}

pub fn run(
    players_file: &Path,
    fields_file: &Path,
    criteria_file: Option<&String>,
    top: Option<usize>,
) -> Result<String, FieldMapAppError> {
    let inputs = app_ops::read_inputs_today(players_file, fields_file)?;
    let criteria = app_ops::read_criteria(criteria_file)?;
    let output = recommend_from(&inputs, &criteria, top);
    match &output.recommendation {
        Some(r) => log::info!("recommended field: {r}"),
        None => log::info!("no recommendation available"),
    }
    let json = serde_json::to_string_pretty(&output)?;
    Ok(json)
}

/// filters the inputs and finds the optimal field, optionally with the
/// `top` closest fields in ranked order
pub fn recommend_from(
    inputs: &app_ops::FieldMapInputs,
    criteria: &crate::config::CriteriaConfig,
    top: Option<usize>,
) -> RecommendOutput {
    let (players, fields) = app_ops::apply_criteria(inputs, criteria);
    let (recommendation, ranking) = match top {
        Some(n) => {
            let ranked = recommend::rank_fields(&players, &fields);
            let head = ranked.first().cloned();
            (head, Some(ranked.into_iter().take(n).collect::<Vec<_>>()))
        }
        None => (recommend::find_optimal_field(&players, &fields), None),
    };
    RecommendOutput {
        player_count: players.len(),
        field_count: fields.len(),
        recommendation,
        ranking,
    }
}

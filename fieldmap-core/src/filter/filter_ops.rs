use super::{FieldFilter, PlayerFilter};
use crate::model::{
    field::{FieldCriteria, FieldRecord},
    player::{PlayerCriteria, PlayerRecord},
};
use itertools::Itertools;

/// selects the players matching every selected criterion.
///
/// criteria combine with AND semantics and text comparisons ignore case and
/// surrounding whitespace. when no criterion is selected the result is empty:
/// nothing is shown until a filter is chosen.
///
/// # Arguments
///
/// * `players` - the full player collection, left untouched
/// * `criteria` - user-selected filter values
///
/// # Returns
///
/// * a new collection holding the matching players in source order
pub fn apply_player_filters(
    players: &[PlayerRecord],
    criteria: &PlayerCriteria,
) -> Vec<PlayerRecord> {
    if criteria.is_empty() {
        log::debug!("no player criteria selected, filtered player set is empty");
        return vec![];
    }
    let filters = PlayerFilter::from_criteria(criteria);
    let mut remaining = players.iter().collect_vec();
    for filter in filters.iter() {
        remaining.retain(|p| filter.matches(p));
        log::debug!("after '{filter}': {} players remain", remaining.len());
    }
    log::debug!("kept {} of {} players", remaining.len(), players.len());
    remaining.into_iter().cloned().collect_vec()
}

/// selects the fields matching every selected criterion, with the same
/// semantics as [`apply_player_filters`].
pub fn apply_field_filters(fields: &[FieldRecord], criteria: &FieldCriteria) -> Vec<FieldRecord> {
    if criteria.is_empty() {
        log::debug!("no field criteria selected, filtered field set is empty");
        return vec![];
    }
    let filters = FieldFilter::from_criteria(criteria);
    let mut remaining = fields.iter().collect_vec();
    for filter in filters.iter() {
        remaining.retain(|f| filter.matches(f));
        log::debug!("after '{filter}': {} fields remain", remaining.len());
    }
    log::debug!("kept {} of {} fields", remaining.len(), fields.len());
    remaining.into_iter().cloned().collect_vec()
}

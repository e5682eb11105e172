use super::{DistanceMatrix, FieldRecommendation, GroupKey, GroupRecommendation, PlayerGrouping};
use crate::model::{field::FieldRecord, player::PlayerRecord};
use std::collections::BTreeMap;

/// finds the field with the smallest mean geodesic distance to the players.
///
/// players and fields without both coordinates are ignored. when the fields
/// tie on the minimum mean, the one appearing first in `fields` is returned.
///
/// # Arguments
///
/// * `players` - a (typically filtered) player collection
/// * `fields` - a (typically filtered) field collection
///
/// # Returns
///
/// * the optimal field and its mean distance in miles, or None when no located
///   player or no located field remains
pub fn find_optimal_field(
    players: &[PlayerRecord],
    fields: &[FieldRecord],
) -> Option<FieldRecommendation> {
    let result = DistanceMatrix::build(players, fields).and_then(|m| m.optimal());
    match &result {
        Some(r) => log::debug!("optimal field is {r}"),
        None => log::debug!("no optimal field, no located players or fields"),
    }
    result
}

/// every located field with its mean distance to the players, closest first.
/// the sort is stable so tied fields keep their input order, and the head of
/// the list is the result of [`find_optimal_field`].
pub fn rank_fields(players: &[PlayerRecord], fields: &[FieldRecord]) -> Vec<FieldRecommendation> {
    let mut ranked = match DistanceMatrix::build(players, fields) {
        Some(matrix) => matrix.average_distances(),
        None => return vec![],
    };
    ranked.sort_by(|a, b| a.average_distance_miles.total_cmp(&b.average_distance_miles));
    ranked
}

/// splits players by the grouping attribute and finds the optimal field for
/// each group. players missing the attribute belong to no group. groups are
/// returned in key order.
pub fn find_optimal_field_by_group(
    players: &[PlayerRecord],
    fields: &[FieldRecord],
    grouping: PlayerGrouping,
) -> Vec<GroupRecommendation> {
    let mut groups: BTreeMap<GroupKey, Vec<PlayerRecord>> = BTreeMap::new();
    for player in players.iter() {
        if let Some(key) = grouping.group_key(player) {
            groups.entry(key).or_default().push(player.clone());
        }
    }
    log::debug!("grouping players by {grouping} produced {} groups", groups.len());

    groups
        .into_iter()
        .map(|(group, members)| GroupRecommendation {
            recommendation: find_optimal_field(&members, fields),
            player_count: members.len(),
            group,
        })
        .collect()
}

use super::FieldRecommendation;
use crate::{
    model::{field::FieldRecord, player::PlayerRecord},
    util::geo_ops,
};
use itertools::Itertools;

/// geodesic distances in miles between every located field and every located
/// player. records without coordinates are left out on both sides.
///
/// rows follow the source field order and columns the source player order, so
/// every derived value is deterministic for a fixed input ordering. building the
/// matrix is O(players × fields).
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    field_names: Vec<String>,
    player_count: usize,
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// computes the matrix, or None when no players or no fields have a location.
    pub fn build(players: &[PlayerRecord], fields: &[FieldRecord]) -> Option<DistanceMatrix> {
        let player_locations = players
            .iter()
            .filter_map(PlayerRecord::location)
            .collect_vec();
        let field_locations = fields
            .iter()
            .filter_map(|f| f.location().map(|loc| (f.name.clone(), loc)))
            .collect_vec();
        log::debug!(
            "{} of {} players and {} of {} fields have locations",
            player_locations.len(),
            players.len(),
            field_locations.len(),
            fields.len()
        );
        if player_locations.is_empty() || field_locations.is_empty() {
            return None;
        }

        let (field_names, rows): (Vec<_>, Vec<_>) = field_locations
            .into_iter()
            .map(|(name, field_loc)| {
                let row = player_locations
                    .iter()
                    .map(|player_loc| geo_ops::geodesic_distance_miles(*player_loc, field_loc))
                    .collect_vec();
                (name, row)
            })
            .unzip();

        Some(DistanceMatrix {
            field_names,
            player_count: player_locations.len(),
            rows,
        })
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// number of located players, the column count
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// distances from one field to each located player
    pub fn distances(&self, field_name: &str) -> Option<&[f64]> {
        self.field_names
            .iter()
            .position(|n| n == field_name)
            .map(|idx| self.rows[idx].as_slice())
    }

    /// mean distance of each located field, in field order
    pub fn average_distances(&self) -> Vec<FieldRecommendation> {
        self.field_names
            .iter()
            .zip(self.rows.iter())
            .map(|(name, row)| {
                let total: f64 = row.iter().sum();
                FieldRecommendation::new(name, total / self.player_count as f64)
            })
            .collect_vec()
    }

    /// the field with the smallest mean distance. among fields sharing the
    /// minimum, the first in field order wins.
    pub fn optimal(&self) -> Option<FieldRecommendation> {
        self.average_distances()
            .into_iter()
            .fold(None, |best: Option<FieldRecommendation>, candidate| match best {
                Some(b)
                    if b.average_distance_miles
                        .total_cmp(&candidate.average_distance_miles)
                        .is_le() =>
                {
                    Some(b)
                }
                _ => Some(candidate),
            })
    }
}

use super::{FieldRecommendation, GroupKey};
use serde::{Deserialize, Serialize};

/// the optimal field for one group of players. `recommendation` is None when
/// none of the group's players (or none of the fields) have a location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupRecommendation {
    pub group: GroupKey,
    pub player_count: usize,
    pub recommendation: Option<FieldRecommendation>,
}

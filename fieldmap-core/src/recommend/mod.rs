mod distance_matrix;
mod field_recommendation;
mod group_recommendation;
mod player_grouping;
pub mod recommend_ops;

pub use distance_matrix::DistanceMatrix;
pub use field_recommendation::FieldRecommendation;
pub use group_recommendation::GroupRecommendation;
pub use player_grouping::{GroupKey, PlayerGrouping};
pub use recommend_ops::{find_optimal_field, find_optimal_field_by_group, rank_fields};

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a field along with its mean geodesic distance to a set of players
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldRecommendation {
    pub field_name: String,
    pub average_distance_miles: f64,
}

impl FieldRecommendation {
    pub fn new(field_name: &str, average_distance_miles: f64) -> FieldRecommendation {
        FieldRecommendation {
            field_name: String::from(field_name),
            average_distance_miles,
        }
    }
}

impl Display for FieldRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.2} miles on average)",
            self.field_name, self.average_distance_miles
        )
    }
}

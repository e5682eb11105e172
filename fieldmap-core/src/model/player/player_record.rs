use crate::util::geo_ops;
use chrono::{Datelike, NaiveDate};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// a registered player, as loaded from one of the program rosters.
///
/// every attribute other than the race list is optional since column presence
/// varies between roster sources. a missing attribute never matches a filter on
/// that attribute.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerRecord {
    pub program: Option<String>,
    pub age: Option<i64>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub grade: Option<String>,
    #[serde(default)]
    pub race_list: BTreeSet<String>,
    pub school: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PlayerRecord {
    /// calendar year of the player's birth date, if known
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.map(|d| d.year())
    }

    /// the player's home location, or None if either coordinate is missing
    pub fn location(&self) -> Option<Point<f64>> {
        geo_ops::to_point(self.latitude, self.longitude)
    }
}

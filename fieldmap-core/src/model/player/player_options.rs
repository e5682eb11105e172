use super::PlayerRecord;
use crate::util::label_ops;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// the distinct values available for each player criterion, as offered to a
/// user choosing filters. text values are normalized, all lists are sorted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerOptions {
    pub program: Vec<String>,
    pub age: Vec<i64>,
    pub gender: Vec<String>,
    pub grade: Vec<String>,
    pub race: Vec<String>,
    pub school: Vec<String>,
    pub birth_year: Vec<i32>,
}

impl PlayerOptions {
    pub fn from_records(players: &[PlayerRecord]) -> PlayerOptions {
        PlayerOptions {
            program: label_ops::distinct_labels(players.iter().map(|p| p.program.as_deref())),
            age: players.iter().filter_map(|p| p.age).unique().sorted().collect_vec(),
            gender: label_ops::distinct_labels(players.iter().map(|p| p.gender.as_deref())),
            grade: label_ops::distinct_labels(players.iter().map(|p| p.grade.as_deref())),
            race: label_ops::distinct_labels(
                players
                    .iter()
                    .flat_map(|p| p.race_list.iter().map(|r| Some(r.as_str()))),
            ),
            school: label_ops::distinct_labels(players.iter().map(|p| p.school.as_deref())),
            birth_year: players
                .iter()
                .filter_map(PlayerRecord::birth_year)
                .unique()
                .sorted()
                .collect_vec(),
        }
    }
}

use crate::{model::player::PlayerRecord, util::label_ops};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// player attribute used to split a player collection into groups, each of
/// which receives its own field recommendation.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerGrouping {
    Program,
    Age,
    Gender,
    Grade,
    School,
    BirthYear,
}

/// the value of a grouping attribute for one player. numeric keys order
/// numerically and before any text key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(untagged)]
pub enum GroupKey {
    Number(i64),
    Label(String),
}

impl PlayerGrouping {
    /// the player's group, or None if the player lacks the attribute
    pub fn group_key(&self, player: &PlayerRecord) -> Option<GroupKey> {
        let label =
            |v: &Option<String>| label_ops::normalize_opt(v.as_deref()).map(GroupKey::Label);
        match self {
            PlayerGrouping::Program => label(&player.program),
            PlayerGrouping::Age => player.age.map(GroupKey::Number),
            PlayerGrouping::Gender => label(&player.gender),
            PlayerGrouping::Grade => label(&player.grade),
            PlayerGrouping::School => label(&player.school),
            PlayerGrouping::BirthYear => player.birth_year().map(|y| GroupKey::Number(y as i64)),
        }
    }
}

impl Display for PlayerGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerGrouping::Program => write!(f, "program"),
            PlayerGrouping::Age => write!(f, "age"),
            PlayerGrouping::Gender => write!(f, "gender"),
            PlayerGrouping::Grade => write!(f, "grade"),
            PlayerGrouping::School => write!(f, "school"),
            PlayerGrouping::BirthYear => write!(f, "birth_year"),
        }
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Number(n) => write!(f, "{n}"),
            GroupKey::Label(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_group_keys() {
        let player = PlayerRecord {
            age: Some(9),
            grade: Some(String::from(" Kindergarten")),
            birth_date: NaiveDate::from_ymd_opt(2016, 3, 4),
            ..Default::default()
        };
        assert_eq!(PlayerGrouping::Age.group_key(&player), Some(GroupKey::Number(9)));
        assert_eq!(
            PlayerGrouping::Grade.group_key(&player),
            Some(GroupKey::Label(String::from("kindergarten")))
        );
        assert_eq!(
            PlayerGrouping::BirthYear.group_key(&player),
            Some(GroupKey::Number(2016))
        );
        assert_eq!(PlayerGrouping::School.group_key(&player), None);
    }

    #[test]
    fn test_numeric_keys_order_numerically() {
        let mut keys = vec![
            GroupKey::Number(10),
            GroupKey::Label(String::from("u9")),
            GroupKey::Number(9),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                GroupKey::Number(9),
                GroupKey::Number(10),
                GroupKey::Label(String::from("u9"))
            ]
        );
    }
}

use super::LabelSet;
use crate::{
    model::player::{PlayerCriteria, PlayerRecord},
    util::label_ops,
};
use itertools::Itertools;
use std::{collections::BTreeSet, fmt::Display};

/// a single non-empty player criterion, ready to test records against
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerFilter {
    Program(LabelSet),
    Age(BTreeSet<i64>),
    Gender(String),
    Grade(LabelSet),
    /// matches when any of the player's race labels is selected
    Race(LabelSet),
    School(LabelSet),
    BirthYear(BTreeSet<i32>),
}

impl PlayerFilter {
    /// builds one filter per non-empty criterion. an empty result means that no
    /// criterion was selected.
    pub fn from_criteria(criteria: &PlayerCriteria) -> Vec<PlayerFilter> {
        let program = LabelSet::new(&criteria.program);
        let grade = LabelSet::new(&criteria.grade);
        let race = LabelSet::new(&criteria.race);
        let school = LabelSet::new(&criteria.school);
        let gender = label_ops::normalize_opt(criteria.gender.as_deref());

        let mut filters = vec![];
        if !program.is_empty() {
            filters.push(PlayerFilter::Program(program));
        }
        if !criteria.age.is_empty() {
            filters.push(PlayerFilter::Age(criteria.age.clone()));
        }
        if let Some(g) = gender {
            filters.push(PlayerFilter::Gender(g));
        }
        if !grade.is_empty() {
            filters.push(PlayerFilter::Grade(grade));
        }
        if !race.is_empty() {
            filters.push(PlayerFilter::Race(race));
        }
        if !school.is_empty() {
            filters.push(PlayerFilter::School(school));
        }
        if !criteria.birth_year.is_empty() {
            filters.push(PlayerFilter::BirthYear(criteria.birth_year.clone()));
        }
        filters
    }

    /// tests a player against this criterion. a player missing the attribute does not match.
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        match self {
            PlayerFilter::Program(set) => set.contains(player.program.as_deref()),
            PlayerFilter::Age(ages) => player.age.is_some_and(|a| ages.contains(&a)),
            PlayerFilter::Gender(gender) => {
                label_ops::normalize_opt(player.gender.as_deref()).as_ref() == Some(gender)
            }
            PlayerFilter::Grade(set) => set.contains(player.grade.as_deref()),
            PlayerFilter::Race(set) => set.intersects(&player.race_list),
            PlayerFilter::School(set) => set.contains(player.school.as_deref()),
            PlayerFilter::BirthYear(years) => {
                player.birth_year().is_some_and(|y| years.contains(&y))
            }
        }
    }
}

impl Display for PlayerFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerFilter::Program(set) => write!(f, "program in {set}"),
            PlayerFilter::Age(ages) => write!(f, "age in [{}]", ages.iter().join(", ")),
            PlayerFilter::Gender(gender) => write!(f, "gender = {gender}"),
            PlayerFilter::Grade(set) => write!(f, "grade in {set}"),
            PlayerFilter::Race(set) => write!(f, "race intersects {set}"),
            PlayerFilter::School(set) => write!(f, "school in {set}"),
            PlayerFilter::BirthYear(years) => {
                write!(f, "birth year in [{}]", years.iter().join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| String::from(*v)).collect()
    }

    #[test]
    fn test_only_non_empty_criteria_become_filters() {
        let criteria = PlayerCriteria {
            program: set(&["Travel"]),
            gender: Some(String::from(" ")),
            grade: set(&[""]),
            age: BTreeSet::from([9, 10]),
            ..Default::default()
        };
        let filters = PlayerFilter::from_criteria(&criteria);
        assert_eq!(filters.len(), 2);
        assert!(matches!(filters[0], PlayerFilter::Program(_)));
        assert!(matches!(filters[1], PlayerFilter::Age(_)));
        assert!(PlayerFilter::from_criteria(&PlayerCriteria::default()).is_empty());
    }

    #[test]
    fn test_gender_exact_case_insensitive() {
        let filter = PlayerFilter::Gender(String::from("female"));
        let player = PlayerRecord {
            gender: Some(String::from("Female ")),
            ..Default::default()
        };
        assert!(filter.matches(&player));
        let player = PlayerRecord {
            gender: Some(String::from("fem")),
            ..Default::default()
        };
        assert!(!filter.matches(&player));
        assert!(!filter.matches(&PlayerRecord::default()));
    }

    #[test]
    fn test_race_any_intersection() {
        let player = PlayerRecord {
            race_list: set(&["black", "white"]),
            ..Default::default()
        };
        assert!(PlayerFilter::Race(LabelSet::new(&set(&["White"]))).matches(&player));
        assert!(!PlayerFilter::Race(LabelSet::new(&set(&["asian"]))).matches(&player));
        let white = PlayerFilter::Race(LabelSet::new(&set(&["white"])));
        assert!(!white.matches(&PlayerRecord::default()));
    }

    #[test]
    fn test_birth_year() {
        let filter = PlayerFilter::BirthYear(BTreeSet::from([2016]));
        let player = PlayerRecord {
            birth_date: NaiveDate::from_ymd_opt(2016, 12, 31),
            ..Default::default()
        };
        assert!(filter.matches(&player));
        assert!(!filter.matches(&PlayerRecord::default()));
    }

    #[test]
    fn test_display() {
        let filter = PlayerFilter::Grade(LabelSet::new(&set(&["3rd", "K"])));
        assert_eq!(filter.to_string(), "grade in [3rd, k]");
    }
}

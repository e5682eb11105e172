use crate::util::label_ops;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// user-selected filter values for a player collection. an empty set or a
/// missing (or blank) single value imposes no constraint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerCriteria {
    pub program: BTreeSet<String>,
    pub age: BTreeSet<i64>,
    pub gender: Option<String>,
    pub grade: BTreeSet<String>,
    pub race: BTreeSet<String>,
    pub school: BTreeSet<String>,
    pub birth_year: BTreeSet<i32>,
}

impl PlayerCriteria {
    /// true when no criterion has been selected, in which case filtering
    /// yields no players at all.
    pub fn is_empty(&self) -> bool {
        label_ops::all_blank(&self.program)
            && self.age.is_empty()
            && self.gender.as_deref().is_none_or(|g| g.trim().is_empty())
            && label_ops::all_blank(&self.grade)
            && label_ops::all_blank(&self.race)
            && label_ops::all_blank(&self.school)
            && self.birth_year.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(PlayerCriteria::default().is_empty());
    }

    #[test]
    fn test_blank_gender_is_empty() {
        let criteria = PlayerCriteria {
            gender: Some(String::from("  ")),
            ..Default::default()
        };
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_any_criterion_is_not_empty() {
        let criteria = PlayerCriteria {
            birth_year: BTreeSet::from([2015]),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
        let criteria = PlayerCriteria {
            gender: Some(String::from("female")),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }
}

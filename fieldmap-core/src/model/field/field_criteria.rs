use crate::util::label_ops;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// user-selected filter values for a field collection
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FieldCriteria {
    pub capacity: BTreeSet<i64>,
    pub surface: BTreeSet<String>,
    pub size: BTreeSet<String>,
    pub game_size: BTreeSet<String>,
    pub lights: Option<String>,
    pub permanent_lines: BTreeSet<String>,
    pub goals: Option<String>,
}

impl FieldCriteria {
    /// true when no criterion has been selected
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        self.capacity.is_empty()
            && label_ops::all_blank(&self.surface)
            && label_ops::all_blank(&self.size)
            && label_ops::all_blank(&self.game_size)
            && blank(&self.lights)
            && label_ops::all_blank(&self.permanent_lines)
            && blank(&self.goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(FieldCriteria::default().is_empty());
        let criteria = FieldCriteria {
            lights: Some(String::new()),
            goals: Some(String::from(" ")),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        let criteria = FieldCriteria {
            capacity: BTreeSet::from([2]),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }
}

use crate::util::label_ops;
use itertools::Itertools;
use std::{collections::BTreeSet, fmt::Display};

/// a set of normalized labels supporting case-insensitive membership tests.
/// blank labels are discarded on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    pub fn new<'a>(values: impl IntoIterator<Item = &'a String>) -> LabelSet {
        let labels = values
            .into_iter()
            .filter_map(|v| label_ops::normalize_opt(Some(v)))
            .collect();
        LabelSet(labels)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// true if the (normalized) value is a member. a missing value is never a member.
    pub fn contains(&self, value: Option<&str>) -> bool {
        match label_ops::normalize_opt(value) {
            Some(v) => self.0.contains(&v),
            None => false,
        }
    }

    /// true if any of the values is a member
    pub fn intersects<'a>(&self, values: impl IntoIterator<Item = &'a String>) -> bool {
        values.into_iter().any(|v| self.contains(Some(v)))
    }
}

impl Display for LabelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

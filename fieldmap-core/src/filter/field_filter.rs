use super::LabelSet;
use crate::{
    model::field::{FieldCriteria, FieldRecord},
    util::label_ops,
};
use itertools::Itertools;
use std::{collections::BTreeSet, fmt::Display};

/// a single non-empty field criterion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldFilter {
    Capacity(BTreeSet<i64>),
    Surface(LabelSet),
    Size(LabelSet),
    GameSize(LabelSet),
    Lights(String),
    PermanentLines(LabelSet),
    Goals(String),
}

impl FieldFilter {
    pub fn from_criteria(criteria: &FieldCriteria) -> Vec<FieldFilter> {
        let labels: [(LabelSet, fn(LabelSet) -> FieldFilter); 3] = [
            (LabelSet::new(&criteria.surface), FieldFilter::Surface),
            (LabelSet::new(&criteria.size), FieldFilter::Size),
            (LabelSet::new(&criteria.game_size), FieldFilter::GameSize),
        ];

        let mut filters = vec![];
        if !criteria.capacity.is_empty() {
            filters.push(FieldFilter::Capacity(criteria.capacity.clone()));
        }
        for (set, variant) in labels {
            if !set.is_empty() {
                filters.push(variant(set));
            }
        }
        if let Some(lights) = label_ops::normalize_opt(criteria.lights.as_deref()) {
            filters.push(FieldFilter::Lights(lights));
        }
        let permanent_lines = LabelSet::new(&criteria.permanent_lines);
        if !permanent_lines.is_empty() {
            filters.push(FieldFilter::PermanentLines(permanent_lines));
        }
        if let Some(goals) = label_ops::normalize_opt(criteria.goals.as_deref()) {
            filters.push(FieldFilter::Goals(goals));
        }
        filters
    }

    /// tests a field against this criterion. a field missing the attribute does not match.
    pub fn matches(&self, field: &FieldRecord) -> bool {
        let equals = |expected: &String, value: Option<&str>| {
            label_ops::normalize_opt(value).as_ref() == Some(expected)
        };
        match self {
            FieldFilter::Capacity(caps) => field.capacity.is_some_and(|c| caps.contains(&c)),
            FieldFilter::Surface(set) => set.contains(field.surface.as_deref()),
            FieldFilter::Size(set) => set.contains(field.size.as_deref()),
            FieldFilter::GameSize(set) => set.contains(field.game_size.as_deref()),
            FieldFilter::Lights(lights) => equals(lights, field.lights.as_deref()),
            FieldFilter::PermanentLines(set) => set.contains(field.permanent_lines.as_deref()),
            FieldFilter::Goals(goals) => equals(goals, field.goals.as_deref()),
        }
    }
}

impl Display for FieldFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldFilter::Capacity(caps) => write!(f, "capacity in [{}]", caps.iter().join(", ")),
            FieldFilter::Surface(set) => write!(f, "surface in {set}"),
            FieldFilter::Size(set) => write!(f, "size in {set}"),
            FieldFilter::GameSize(set) => write!(f, "game size in {set}"),
            FieldFilter::Lights(lights) => write!(f, "lights = {lights}"),
            FieldFilter::PermanentLines(set) => write!(f, "permanent lines in {set}"),
            FieldFilter::Goals(goals) => write!(f, "goals = {goals}"),
        }
    }
}

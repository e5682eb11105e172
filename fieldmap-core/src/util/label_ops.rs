use itertools::Itertools;

/// normalizes a free-text label so that comparisons are insensitive to case
/// and surrounding whitespace.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// normalizes an optional label, treating blank values as missing.
pub fn normalize_opt(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|v| !v.is_empty())
}

/// normalized, de-duplicated and sorted labels, skipping missing or blank ones
pub fn distinct_labels<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values.filter_map(normalize_opt).unique().sorted().collect_vec()
}

/// true if no value remains after normalization, meaning a set-valued
/// criterion holding these values imposes no constraint
pub fn all_blank<'a>(values: impl IntoIterator<Item = &'a String>) -> bool {
    values.into_iter().all(|v| v.trim().is_empty())
}

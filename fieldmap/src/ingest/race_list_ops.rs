use fieldmap_core::util::label_ops;
use itertools::Itertools;
use std::collections::BTreeSet;

/// placeholder text left behind when a missing race value was stringified upstream
const MISSING_MARKERS: [&str; 3] = ["nan", "none", "null"];

/// parses a serialized race list into a set of normalized race labels.
///
/// accepts either a literal list such as `['black', 'white']` or a plain
/// comma-delimited string such as `black, white`. labels are trimmed of
/// whitespace and quotes and lowercased; blank labels and missing-value
/// markers are dropped.
pub fn parse_race_list(value: &str) -> BTreeSet<String> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    inner
        .split(',')
        .map(|label| label.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter_map(|label| label_ops::normalize_opt(Some(label)))
        .filter(|label| !MISSING_MARKERS.contains(&label.as_str()))
        .collect()
}

/// serializes a race list in the literal list form read by [`parse_race_list`]
pub fn format_race_list(races: &BTreeSet<String>) -> String {
    format!("[{}]", races.iter().map(|r| format!("'{r}'")).join(", "))
}

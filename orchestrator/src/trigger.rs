//! Opt-in trigger detection

/// Strip the trigger prefix from a raw search query.
///
/// Matches only when the trimmed query starts with `trigger` (case-sensitive,
/// at position 0). The prefix is removed once and the remainder is trimmed;
/// a bare trigger yields `Some("")`. An empty trigger never matches.
pub fn detect(raw_query: &str, trigger: &str) -> Option<String> {
    if trigger.is_empty() {
        return None;
    }

    raw_query
        .trim()
        .strip_prefix(trigger)
        .map(|rest| rest.trim().to_string())
}

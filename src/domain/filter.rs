//! Case-insensitive substring filtering.
//!
//! Both search boxes share one rule: a candidate matches when its lowercased
//! name contains the lowercased query. The empty query matches everything;
//! whether that is shown is decided by each box.

/// Returns `true` if `text` contains `query`, ignoring case.
///
/// ```
/// use autocomplete::domain::filter::matches;
///
/// assert!(matches("Leanne Graham", "leanne"));
/// assert!(matches("Alaska", ""));
/// assert!(!matches("Ervin Howell", "leanne"));
/// ```
#[must_use]
pub fn matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Filters `names` by [`matches`], preserving order and duplicates.
pub fn filter_names<'a, I>(names: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(String::from)
        .collect()
}

/// Locates the first case-insensitive occurrence of `query` in `text`.
///
/// Returns a `(start, end)` range in character indices of `text` (exclusive
/// end), suitable for highlighting. Returns `None` for the empty query or when
/// there is no match.
///
/// Lowercasing can change the number of characters (`'İ'` lowercases to two),
/// so the search runs over the lowercased text while every lowercased
/// character remembers which original character produced it.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (idx, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            origin.push(idx);
        }
    }

    let needle = query.to_lowercase();
    let byte_start = lowered.find(&needle)?;
    let char_start = lowered[..byte_start].chars().count();
    let char_len = needle.chars().count();

    let start = origin[char_start];
    let end = origin[char_start + char_len - 1] + 1;
    Some((start, end))
}

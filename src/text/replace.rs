//! # Placeholder Replacement
//!
//! Literal substring substitution driven by flat target/replacement lists.

/// Applies `[target, replacement, target, replacement, ...]` to `text`.
///
/// Each pair runs on the output of the previous one. Returns `None` when the
/// list has an odd length, since the last target would have no replacement.
///
/// # Examples
///
/// ```
/// use itembuilder::replace_pairs;
///
/// let out = replace_pairs("{player} has {count}", &["{player}", "Steve", "{count}", "3"]);
/// assert_eq!(out.as_deref(), Some("Steve has 3"));
/// assert_eq!(replace_pairs("x", &["x"]), None);
/// ```
pub fn replace_pairs<S: AsRef<str>>(text: &str, pairs: &[S]) -> Option<String> {
    if pairs.len() % 2 != 0 {
        return None;
    }

    Some(pairs.chunks_exact(2).fold(text.to_string(), |acc, pair| {
        acc.replace(pair[0].as_ref(), pair[1].as_ref())
    }))
}

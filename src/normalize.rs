//! Text normalization applied to listing bodies before tokenization.

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut collapsed = String::with_capacity(text.as_ref().len());
    let mut in_run = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            in_run = true;
            continue;
        }
        if in_run && !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push(ch);
        in_run = false;
    }
    collapsed
}

/// Remove every character that is neither alphanumeric nor whitespace.
/// Removed characters leave no gap behind; existing spacing is untouched.
pub fn strip_punctuation<T: AsRef<str>>(text: T) -> String {
    text.as_ref()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .collect()
}

//! Hashtag extraction from a section body.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// `#` followed by word characters with at least one letter, not glued to a
/// preceding word (so `page#anchor` and `Slide #3` are ignored).
static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\w&#/])(#\w*[^\W\d_]\w*)").unwrap());

/// Collects hashtags from both `**Hashtags:**` lines and inline text.
///
/// Tags are returned in order of first appearance. Repeats are dropped
/// case-insensitively; the first spelling wins.
pub fn extract_hashtags(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut hashtags = Vec::new();

    for line in body.lines() {
        for caps in HASHTAG_PATTERN.captures_iter(line) {
            let tag = &caps[1];
            if seen.insert(tag.to_lowercase()) {
                hashtags.push(tag.to_string());
            }
        }
    }

    hashtags
}

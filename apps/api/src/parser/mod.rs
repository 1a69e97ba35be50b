//! Platform content parser: turns one block of agent markdown into
//! platform-tagged content items and scores it against the requested platforms.
//!
//! Pure and deterministic. Malformed input never fails; it degrades to an
//! unrecognized platform tag, the default platform, or an empty result.

pub mod completeness;
pub mod fixtures;
pub mod hashtags;
pub mod platform;
pub mod sections;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use completeness::{compute_completeness, unexpected_platforms};
pub use hashtags::extract_hashtags;
pub use platform::Platform;
pub use sections::{split_sections, Section};

/// One platform-tagged unit of generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub platform: Platform,
    pub content: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub content_items: Vec<ContentItem>,
    /// Fraction of requested platforms found, in [0, 1].
    pub completeness_score: f64,
    pub missing_platforms: Vec<Platform>,
}

/// Splits `agent_response` into content items at its `###` platform headings.
///
/// - Each heading becomes one item, in order, even when its body is empty.
/// - Without any heading the whole trimmed text is a single item tagged
///   `default_platform`.
/// - `requested_platforms` only drives `missing_platforms` and
///   `completeness_score`; nothing is filtered out.
pub fn parse_agent_output(
    agent_response: &str,
    default_platform: Platform,
    requested_platforms: &[Platform],
) -> ParseResult {
    let content_items = segment(agent_response, default_platform);
    let completeness = compute_completeness(&content_items, requested_platforms);

    debug!(
        items = content_items.len(),
        score = completeness.score,
        missing = completeness.missing.len(),
        "Parsed agent output"
    );

    ParseResult {
        content_items,
        completeness_score: completeness.score,
        missing_platforms: completeness.missing,
    }
}

fn segment(agent_response: &str, default_platform: Platform) -> Vec<ContentItem> {
    let trimmed = agent_response.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let split = split_sections(trimmed);

    if split.sections.is_empty() {
        return vec![ContentItem {
            platform: default_platform,
            content: trimmed.to_string(),
            hashtags: extract_hashtags(trimmed),
        }];
    }

    if !split.preamble.is_empty() {
        debug!(chars = split.preamble.len(), "Discarding text before first heading");
    }

    split
        .sections
        .into_iter()
        .map(|section| {
            let platform = Platform::from_label(&section.heading);
            if section.body.is_empty() {
                debug!(%platform, heading = %section.heading, "Section has no body");
            }
            ContentItem {
                hashtags: extract_hashtags(&section.body),
                content: section.body,
                platform,
            }
        })
        .collect()
}

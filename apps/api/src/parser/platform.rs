//! Platform identifiers: canonical distribution channels plus a pass-through
//! variant for heading labels the alias table does not know.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A distribution channel a content item is written for.
///
/// Serialized as its canonical identifier (`"twitter"`, `"pitch_deck"`, ...).
/// Unknown labels survive as `Unrecognized` carrying the normalized slug, so
/// callers can report them as unexpected instead of losing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Twitter,
    Linkedin,
    PitchDeck,
    Instagram,
    Facebook,
    Blog,
    Email,
    Unrecognized(String),
}

/// Trailing words agents like to append to a platform name ("LinkedIn Post").
const TRAILING_QUALIFIERS: &[&str] = &[
    "post", "posts", "thread", "content", "version", "slides", "copy",
];

impl Platform {
    /// Every recognized platform, in canonical order.
    pub const KNOWN: [Platform; 7] = [
        Platform::Twitter,
        Platform::Linkedin,
        Platform::PitchDeck,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Blog,
        Platform::Email,
    ];

    /// Maps a heading label or identifier to a platform.
    ///
    /// Decorative glyphs and markdown emphasis are stripped and matching is
    /// case-insensitive, so `"🐦 Twitter"`, `"**twitter**"` and `"Twitter:"`
    /// all resolve to `Platform::Twitter`.
    pub fn from_label(label: &str) -> Platform {
        let normalized = normalize_label(label);

        if let Some(platform) = lookup_alias(&normalized) {
            return platform;
        }

        // "linkedin post" / "twitter thread" → retry without the qualifier
        if let Some((head, tail)) = normalized.rsplit_once(' ') {
            if TRAILING_QUALIFIERS.contains(&tail) {
                if let Some(platform) = lookup_alias(head) {
                    return platform;
                }
            }
        }

        Platform::Unrecognized(normalized.replace(' ', "_"))
    }

    /// Canonical identifier, or the normalized slug for unrecognized labels.
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::PitchDeck => "pitch_deck",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Blog => "blog",
            Platform::Email => "email",
            Platform::Unrecognized(slug) => slug,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Platform::Unrecognized(_))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        Platform::from_label(&value)
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Platform::from_label(value)
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        match value {
            Platform::Unrecognized(slug) => slug,
            known => known.as_str().to_string(),
        }
    }
}

fn lookup_alias(normalized: &str) -> Option<Platform> {
    let platform = match normalized {
        "twitter" | "x" | "tweet" | "tweets" | "x twitter" | "twitter x" => Platform::Twitter,
        "linkedin" | "linked in" => Platform::Linkedin,
        "pitch deck" | "pitch_deck" | "pitchdeck" | "pitch" | "deck" => Platform::PitchDeck,
        "instagram" | "insta" => Platform::Instagram,
        "facebook" | "fb" => Platform::Facebook,
        "blog" | "blog post" | "article" => Platform::Blog,
        "email" | "e mail" | "newsletter" => Platform::Email,
        _ => return None,
    };
    Some(platform)
}

/// Lower-cases, turns anything that is not a letter, digit or `_` into a word
/// break, and collapses the remaining words with single spaces.
fn normalize_label(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

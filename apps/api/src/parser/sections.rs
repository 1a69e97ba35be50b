//! Line scanner that splits agent output at level-3 headings.

use std::sync::LazyLock;

use regex::Regex;

/// `### <label>`, exactly three hashes, so `####` sub-headings stay in the body.
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}###[ \t]+(.+?)[ \t#]*$").unwrap());

/// A line made only of three or more hyphens.
static RULE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-{3,}\s*$").unwrap());

/// One heading plus the text that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Raw heading label, e.g. `"🐦 Twitter"`.
    pub heading: String,
    /// Body with surrounding rule lines and whitespace removed.
    pub body: String,
}

/// Result of scanning: text before the first heading, then the sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionSplit {
    pub preamble: String,
    pub sections: Vec<Section>,
}

/// Returns the label of a level-3 heading line, if the line is one.
pub fn heading_label(line: &str) -> Option<&str> {
    HEADING_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|label| label.chars().any(char::is_alphanumeric))
}

pub fn is_rule(line: &str) -> bool {
    RULE_PATTERN.is_match(line)
}

/// Splits `text` at every level-3 heading.
pub fn split_sections(text: &str) -> SectionSplit {
    let mut preamble: Vec<&str> = Vec::new();
    let mut sections: Vec<(String, Vec<&str>)> = Vec::new();

    for line in text.lines() {
        if let Some(label) = heading_label(line) {
            sections.push((label.to_string(), Vec::new()));
            continue;
        }
        match sections.last_mut() {
            Some((_, body)) => body.push(line),
            None => preamble.push(line),
        }
    }

    SectionSplit {
        preamble: clean_body(&preamble),
        sections: sections
            .into_iter()
            .map(|(heading, lines)| Section {
                heading,
                body: clean_body(&lines),
            })
            .collect(),
    }
}

/// Drops blank and rule lines at both ends, keeping the inside verbatim.
fn clean_body(lines: &[&str]) -> String {
    let is_edge = |line: &&str| line.trim().is_empty() || is_rule(line);

    let start = lines.iter().position(|l| !is_edge(l)).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !is_edge(l))
        .map_or(start, |i| i + 1);

    lines[start..end].join("\n").trim().to_string()
}

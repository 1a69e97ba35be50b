use crate::parser::platform::Platform;
use crate::parser::ContentItem;

/// How many of the requested platforms were actually produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Completeness {
    pub score: f64,
    pub missing: Vec<Platform>,
}

/// Scores parsed items against the platforms the caller asked for.
///
/// Requested platforms are deduplicated (first occurrence wins) before
/// scoring. An empty request is trivially complete.
pub fn compute_completeness(items: &[ContentItem], requested: &[Platform]) -> Completeness {
    let requested = dedup_preserving_order(requested.iter());

    if requested.is_empty() {
        return Completeness {
            score: 1.0,
            missing: Vec::new(),
        };
    }

    let total = requested.len();
    let missing: Vec<Platform> = requested
        .into_iter()
        .filter(|platform| !items.iter().any(|item| &item.platform == *platform))
        .cloned()
        .collect();

    let found = total - missing.len();
    let score = (found as f64 / total as f64).clamp(0.0, 1.0);

    Completeness { score, missing }
}

/// Platforms present in `items` that nobody asked for, in order of appearance.
pub fn unexpected_platforms(items: &[ContentItem], requested: &[Platform]) -> Vec<Platform> {
    dedup_preserving_order(items.iter().map(|item| &item.platform))
        .into_iter()
        .filter(|platform| !requested.contains(platform))
        .cloned()
        .collect()
}

fn dedup_preserving_order<'a>(platforms: impl Iterator<Item = &'a Platform>) -> Vec<&'a Platform> {
    let mut unique: Vec<&Platform> = Vec::new();
    for platform in platforms {
        if !unique.contains(&platform) {
            unique.push(platform);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(platform: Platform) -> ContentItem {
        ContentItem {
            platform,
            content: "body".to_string(),
            hashtags: vec![],
        }
    }

    #[test]
    fn test_all_requested_present_scores_one() {
        let items = vec![item(Platform::Twitter), item(Platform::Linkedin)];
        let c = compute_completeness(&items, &[Platform::Twitter, Platform::Linkedin]);
        assert_eq!(c.score, 1.0);
        assert!(c.missing.is_empty());
    }

    #[test]
    fn test_three_of_four_scores_point_seven_five() {
        let items = vec![
            item(Platform::Twitter),
            item(Platform::Linkedin),
            item(Platform::PitchDeck),
        ];
        let requested = [
            Platform::Twitter,
            Platform::Linkedin,
            Platform::PitchDeck,
            Platform::Instagram,
        ];
        let c = compute_completeness(&items, &requested);
        assert!((c.score - 0.75).abs() < f64::EPSILON);
        assert_eq!(c.missing, vec![Platform::Instagram]);
    }

    #[test]
    fn test_empty_request_is_complete_even_without_items() {
        let c = compute_completeness(&[], &[]);
        assert_eq!(c.score, 1.0);
        assert!(c.missing.is_empty());
    }

    #[test]
    fn test_no_items_scores_zero_when_something_requested() {
        let c = compute_completeness(&[], &[Platform::Twitter, Platform::Email]);
        assert_eq!(c.score, 0.0);
        assert_eq!(c.missing, vec![Platform::Twitter, Platform::Email]);
    }

    #[test]
    fn test_duplicate_requests_count_once() {
        let items = vec![item(Platform::Twitter)];
        let c = compute_completeness(
            &items,
            &[Platform::Twitter, Platform::Twitter, Platform::Linkedin],
        );
        assert!((c.score - 0.5).abs() < f64::EPSILON);
        assert_eq!(c.missing, vec![Platform::Linkedin]);
    }

    #[test]
    fn test_repeated_items_do_not_inflate_score() {
        let items = vec![item(Platform::Twitter), item(Platform::Twitter)];
        let c = compute_completeness(&items, &[Platform::Twitter, Platform::Linkedin]);
        assert!((c.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unexpected_platforms_are_distinct_and_ordered() {
        let items = vec![
            item(Platform::Unrecognized("youtube".to_string())),
            item(Platform::Twitter),
            item(Platform::Blog),
            item(Platform::Unrecognized("youtube".to_string())),
        ];
        let unexpected = unexpected_platforms(&items, &[Platform::Twitter]);
        assert_eq!(
            unexpected,
            vec![Platform::Unrecognized("youtube".to_string()), Platform::Blog]
        );
    }
}

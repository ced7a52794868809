//! Heuristic action item extraction from transcript segments.
//!
//! A tagged rule list, not a grammar: each cue rule is an independent
//! whole-word pattern, and owner/due-date extraction are separate rules on
//! top. False positives and negatives are expected; the contract is
//! determinism, not linguistic correctness.

use std::sync::LazyLock;

use entity::action_items::{ActionItem, SourceSpan, TITLE_MAX_CHARS, UNASSIGNED_OWNER};
use entity::segments::Segment;
use log::*;
use regex::Regex;

/// One action-cue rule: a named pattern that flags a segment as a probable
/// task or commitment.
struct CueRule {
    name: &'static str,
    pattern: Regex,
}

static CUE_RULES: LazyLock<Vec<CueRule>> = LazyLock::new(|| {
    let cue = |name, pattern: &str| CueRule {
        name,
        pattern: Regex::new(pattern).expect("invalid action cue pattern"),
    };
    vec![
        cue("please", r"(?i)\bplease\b"),
        cue("can_you", r"(?i)\bcan you\b"),
        cue("assign", r"(?i)\bassign\b"),
        cue("we_will", r"(?i)\bwe will\b"),
        cue("lets", r"(?i)\blet's\b"),
        // "by Friday", "by Monday", ... — any token ending in "day" after "by".
        cue("by_weekday", r"(?i)\bby\s+\w+day\b"),
        cue("eta", r"(?i)\bETA\b"),
        cue("due", r"(?i)\bdue\b"),
    ]
});

// Single capitalized word immediately before "will"/"to" ("Priya will...",
// "Sam to..."). First match wins; multi-word names are not captured.
// Downstream consumers depend on this narrow behavior, so keep it as-is.
static OWNER_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+)\b(?:\s+will|\s+to)").expect("invalid owner pattern")
});

// "by <deadline>"; the captured phrase keeps the segment's original casing
// and includes the leading "by ".
static DUE_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(by\s+(Monday|Tuesday|Wednesday|Thursday|Friday|tomorrow|EOD|next week)\b)")
        .expect("invalid due date pattern")
});

/// Scans segments in input order and emits one candidate [`ActionItem`] per
/// segment matching any cue rule.
///
/// Titles are the segment text hard-cut at [`TITLE_MAX_CHARS`] characters.
/// No dedup is performed across segments. Infallible and deterministic:
/// identical segment text always yields the identical extraction.
pub fn extract_action_items(segments: &[Segment]) -> Vec<ActionItem> {
    segments.iter().filter_map(item_for_segment).collect()
}

fn item_for_segment(segment: &Segment) -> Option<ActionItem> {
    let cue = CUE_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(&segment.text))?;
    trace!("Segment at {:.2}s matched action cue '{}'", segment.start, cue.name);

    let owner = OWNER_RULE
        .captures(&segment.text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| UNASSIGNED_OWNER.to_string());
    let due_date = DUE_RULE
        .captures(&segment.text)
        .map(|caps| caps[1].to_string());

    Some(ActionItem {
        title: segment.text.chars().take(TITLE_MAX_CHARS).collect(),
        owner,
        due_date,
        source_span: SourceSpan {
            start: segment.start,
            end: segment.end,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Segment {
        Segment {
            start: 10.0,
            end: 14.5,
            text: text.to_string(),
            speaker: None,
        }
    }

    #[test]
    fn owner_and_due_date_are_extracted() {
        let items = extract_action_items(&[segment("Priya will send the report by Friday")]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner, "Priya");
        assert_eq!(items[0].due_date.as_deref(), Some("by Friday"));
        assert_eq!(items[0].source_span.start, 10.0);
        assert_eq!(items[0].source_span.end, 14.5);
    }

    #[test]
    fn segment_without_cue_yields_nothing() {
        assert!(extract_action_items(&[segment("The weather is nice today")]).is_empty());
    }

    #[test]
    fn cues_match_case_insensitively() {
        let items = extract_action_items(&[
            segment("PLEASE review the draft"),
            segment("what's the eta on this?"),
        ]);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn weekday_cue_requires_the_by_prefix() {
        assert!(extract_action_items(&[segment("We met last Tuesday")]).is_empty());
        assert_eq!(
            extract_action_items(&[segment("Ship it by Tuesday")]).len(),
            1
        );
    }

    #[test]
    fn owner_defaults_to_unassigned() {
        let items = extract_action_items(&[segment("please circulate the slides")]);
        assert_eq!(items[0].owner, UNASSIGNED_OWNER);
        assert!(items[0].due_date.is_none());
    }

    #[test]
    fn owner_requires_trailing_will_or_to() {
        let items = extract_action_items(&[segment("Friday is the due date, Priya said")]);
        assert_eq!(items[0].owner, UNASSIGNED_OWNER);

        let items = extract_action_items(&[segment("Sam to follow up, due soon")]);
        assert_eq!(items[0].owner, "Sam");
    }

    #[test]
    fn due_phrase_keeps_original_casing() {
        let items = extract_action_items(&[segment("we will wrap this up BY TOMORROW")]);
        assert_eq!(items[0].due_date.as_deref(), Some("BY TOMORROW"));
    }

    #[test]
    fn title_is_hard_cut_at_160_chars() {
        let long_text = format!("please handle {}", "x".repeat(200));
        let items = extract_action_items(&[segment(&long_text)]);
        assert_eq!(items[0].title.chars().count(), TITLE_MAX_CHARS);
        assert!(!items[0].title.ends_with('…'));
    }

    #[test]
    fn one_item_per_matching_segment_no_dedup() {
        let items = extract_action_items(&[
            segment("please send the notes"),
            segment("please send the notes"),
        ]);
        assert_eq!(items.len(), 2);
    }
}

//! Result presentation
//!
//! [`present`] turns `(summary, risks, selected id)` into a view model with
//! no I/O. The TUI and the headless runner both render from it.

use std::ops::Range;

use serde::Serialize;

use lexguard_core::{Risk, Severity};

pub const DISCLAIMER: &str = "This analysis is for informational purposes only and does not \
constitute legal advice. Always consult with a qualified attorney before making important \
legal decisions.";

pub const NO_RISKS_MESSAGE: &str = "No significant risks detected in this document";
pub const NO_SUMMARY_MESSAGE: &str = "No summary available";
pub const ASK_PLACEHOLDER: &str = "AI question answering coming soon...";

/// Clause previews are cut to this many characters
pub const PREVIEW_CHARS: usize = 150;

/// Display class for a severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityClass {
    Danger,
    Warning,
    Info,
    Neutral,
}

impl From<Severity> for SeverityClass {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => SeverityClass::Danger,
            Severity::Medium => SeverityClass::Warning,
            Severity::Low => SeverityClass::Info,
            Severity::Unknown => SeverityClass::Neutral,
        }
    }
}

/// One rendered risk card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskCard {
    pub id: String,
    pub risk_type: String,
    pub severity: Severity,
    pub class: SeverityClass,
    pub explanation: String,
    pub preview: String,
    pub expanded: bool,
    /// Only set on the expanded card, and only when the risk has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum RisksView {
    NoRisks,
    Cards(Vec<RiskCard>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub summary: String,
    pub summary_available: bool,
    pub risk_count: usize,
    pub risks: RisksView,
    pub disclaimer: &'static str,
}

impl ResultsView {
    pub fn cards(&self) -> &[RiskCard] {
        match &self.risks {
            RisksView::Cards(cards) => cards,
            RisksView::NoRisks => &[],
        }
    }
}

/// Build the results view.
///
/// Cards are ordered by severity, highest first; risks of equal severity
/// keep the server's order.
pub fn present(summary: Option<&str>, risks: &[Risk], selected: Option<&str>) -> ResultsView {
    let (summary, summary_available) = match summary.map(str::trim) {
        Some(s) if !s.is_empty() => (s.to_string(), true),
        _ => (NO_SUMMARY_MESSAGE.to_string(), false),
    };

    let risks_view = if risks.is_empty() {
        RisksView::NoRisks
    } else {
        RisksView::Cards(
            ordered(risks)
                .into_iter()
                .map(|risk| card(risk, selected == Some(risk.id.as_str())))
                .collect(),
        )
    };

    ResultsView {
        summary,
        summary_available,
        risk_count: risks.len(),
        risks: risks_view,
        disclaimer: DISCLAIMER,
    }
}

/// Risks in display order
pub fn ordered(risks: &[Risk]) -> Vec<&Risk> {
    let mut sorted: Vec<&Risk> = risks.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.severity.cmp(&a.severity));
    sorted
}

fn card(risk: &Risk, expanded: bool) -> RiskCard {
    RiskCard {
        id: risk.id.clone(),
        risk_type: risk.risk_type.clone(),
        severity: risk.severity,
        class: risk.severity.into(),
        explanation: risk.explanation.clone(),
        preview: clause_preview(&risk.clause),
        expanded,
        rewrite: if expanded {
            risk.rewrite().map(String::from)
        } else {
            None
        },
    }
}

/// First [`PREVIEW_CHARS`] characters of a clause, with an ellipsis when cut
pub fn clause_preview(clause: &str) -> String {
    let clause = clause.trim();
    if clause.chars().count() <= PREVIEW_CHARS {
        return clause.to_string();
    }
    let mut preview: String = clause.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Character range of `risk` inside `edited`, for highlighting.
///
/// Uses the server offsets when they are valid for `original` and the
/// edited text still holds the same characters there; otherwise searches
/// for the clause text. `None` when neither locates it.
pub fn clause_span(original: &str, edited: &str, risk: &Risk) -> Option<Range<usize>> {
    if let Some(span) = risk.span() {
        let original_slice = char_slice(original, span.clone());
        let edited_slice = char_slice(edited, span.clone());
        if original_slice.is_some() && original_slice == edited_slice {
            return Some(span);
        }
    }

    [risk.clause.trim(), risk.original_text.trim()]
        .into_iter()
        .filter(|needle| !needle.is_empty())
        .find_map(|needle| {
            let byte_start = edited.find(needle)?;
            let start = edited[..byte_start].chars().count();
            Some(start..start + needle.chars().count())
        })
}

fn char_slice(text: &str, range: Range<usize>) -> Option<String> {
    if range.end > text.chars().count() {
        return None;
    }
    Some(
        text.chars()
            .skip(range.start)
            .take(range.end - range.start)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexguard_client::test_utils::sample_risk;

    fn risk(id: &str, severity: Severity) -> Risk {
        sample_risk(id, severity)
    }

    #[test]
    fn test_severity_class_lookup() {
        assert_eq!(SeverityClass::from(Severity::High), SeverityClass::Danger);
        assert_eq!(SeverityClass::from(Severity::Medium), SeverityClass::Warning);
        assert_eq!(SeverityClass::from(Severity::Low), SeverityClass::Info);
        assert_eq!(SeverityClass::from(Severity::Unknown), SeverityClass::Neutral);
    }

    #[test]
    fn test_cards_sorted_by_severity_stable() {
        let risks = vec![
            risk("low-1", Severity::Low),
            risk("high-1", Severity::High),
            risk("unknown", Severity::Unknown),
            risk("med", Severity::Medium),
            risk("high-2", Severity::High),
            risk("low-2", Severity::Low),
        ];
        let view = present(Some("s"), &risks, None);
        let ids: Vec<&str> = view.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["high-1", "high-2", "med", "low-1", "low-2", "unknown"]
        );
    }

    #[test]
    fn test_no_risks_view() {
        let view = present(Some("summary"), &[], None);
        assert_eq!(view.risks, RisksView::NoRisks);
        assert_eq!(view.risk_count, 0);
        assert_eq!(view.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_empty_summary_not_available() {
        let view = present(Some("   "), &[], None);
        assert!(!view.summary_available);
        assert_eq!(view.summary, NO_SUMMARY_MESSAGE);

        let view = present(None, &[], None);
        assert_eq!(view.summary, NO_SUMMARY_MESSAGE);
    }

    #[test]
    fn test_disclaimer_always_present() {
        let risks = vec![risk("a", Severity::High)];
        assert_eq!(present(None, &risks, Some("a")).disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_rewrite_only_on_expanded_card() {
        let mut no_rewrite = risk("b", Severity::Low);
        no_rewrite.suggested_rewrite = None;
        let risks = vec![risk("a", Severity::High), no_rewrite];

        let view = present(None, &risks, None);
        assert!(view.cards().iter().all(|c| c.rewrite.is_none() && !c.expanded));

        let view = present(None, &risks, Some("a"));
        assert!(view.cards()[0].expanded);
        assert!(view.cards()[0].rewrite.is_some());
        assert!(view.cards()[1].rewrite.is_none());

        let view = present(None, &risks, Some("b"));
        assert!(view.cards()[1].expanded);
        assert!(view.cards()[1].rewrite.is_none());
    }

    #[test]
    fn test_clause_preview_truncates_at_150_chars() {
        let long = "é".repeat(200);
        let preview = clause_preview(&long);
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));

        let exact = "a".repeat(150);
        assert_eq!(clause_preview(&exact), exact);
    }

    #[test]
    fn test_clause_span_uses_offsets_when_unchanged() {
        let original = "The tenant shall pay all fees.";
        let mut r = risk("a", Severity::High);
        r.clause = "pay all fees".into();
        r.start_position = Some(17);
        r.end_position = Some(29);

        assert_eq!(clause_span(original, original, &r), Some(17..29));
    }

    #[test]
    fn test_clause_span_falls_back_to_search() {
        let original = "The tenant shall pay all fees.";
        let edited = "NOTE: The tenant shall pay all fees.";
        let mut r = risk("a", Severity::High);
        r.clause = "pay all fees".into();
        r.start_position = Some(17);
        r.end_position = Some(29);

        assert_eq!(clause_span(original, edited, &r), Some(23..35));
    }

    #[test]
    fn test_clause_span_none_when_clause_removed() {
        let mut r = risk("a", Severity::High);
        r.clause = "indemnify".into();
        r.original_text = "indemnify".into();
        assert_eq!(clause_span("indemnify", "rewritten entirely", &r), None);
    }
}

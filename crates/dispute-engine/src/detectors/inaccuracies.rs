use crate::patterns::{CURRENT_MARKER, GARBLED_MARKER, INVALID_SSN, LATE_MARKER, MIN_READABLE_LEN};
use report_types::{Issue, IssueKind};

/// Run the general-inaccuracy checks over the whole report text
pub fn detect(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if text.contains(INVALID_SSN) {
        issues.push(Issue {
            kind: IssueKind::InvalidSsn,
            message: format!("Invalid Social Security Number format found ({INVALID_SSN})"),
        });
    }

    if text.contains(GARBLED_MARKER) || text.len() < MIN_READABLE_LEN {
        issues.push(Issue {
            kind: IssueKind::UnreadableContent,
            message: "Report contains unreadable or garbled content".to_string(),
        });
    }

    // Whole-document co-occurrence check. Known-weak heuristic: it can
    // pair a late marker from one account with a Current status from
    // another. Kept as-is for compatibility with existing reports.
    if text.contains(LATE_MARKER) && text.contains(CURRENT_MARKER) {
        issues.push(Issue {
            kind: IssueKind::ConflictingStatus,
            message: "Late payment reported on an account marked Current".to_string(),
        });
    }

    issues
}

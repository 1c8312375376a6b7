//! Credit report analysis engine
//!
//! Runs independent pattern-based detectors over normalized report
//! text and returns an [`AnalysisResult`] with four finding
//! collections: general inaccuracies, disputable inquiries, account
//! records, and personal-information issues.
//!
//! Every run recomputes all collections from scratch; there is no
//! state carried between runs. The analysis date is injected so
//! results are reproducible in tests.

pub mod calendar;
pub mod detectors;
pub mod patterns;

use chrono::NaiveDate;
use report_types::{AnalysisResult, ReportDocument};
use tracing::debug;

/// DisputeEngine entry point
pub struct DisputeEngine;

impl DisputeEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a loaded report document
    pub fn analyze(&self, document: &ReportDocument, today: NaiveDate) -> AnalysisResult {
        self.analyze_text(&document.text, today)
    }

    /// Analyze raw report text (also the test surface)
    pub fn analyze_text(&self, text: &str, today: NaiveDate) -> AnalysisResult {
        let issues = detectors::inaccuracies::detect(text);
        let inquiries = detectors::inquiries::detect(text, today);
        let accounts = detectors::accounts::detect(text);
        // Unverified-account detection reads the extracted account list
        let personal_info = detectors::personal_info::detect(text, &accounts);

        debug!(
            issues = issues.len(),
            inquiries = inquiries.len(),
            accounts = accounts.len(),
            personal_info = personal_info.len(),
            "report analysis complete"
        );

        AnalysisResult {
            issues,
            inquiries,
            accounts,
            personal_info,
            analyzed_on: today,
        }
    }
}

impl Default for DisputeEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Deterministic letter generation and bureau fan-out

use crate::config::{Bureau, LetterConfig, Sender};
use crate::templates::{self, LogicalLetter};
use chrono::NaiveDate;
use report_types::{AnalysisResult, LetterDocument, PersonalInfoIssue};
use tracing::debug;

/// Message shown when an analysis produced nothing actionable
pub const NO_FINDINGS_NOTICE: &str =
    "No actionable findings: the report analysis produced nothing to dispute.";

/// Outcome of letter generation
///
/// Distinguishes "ran with no actionable findings" from an ordinary
/// letter batch. Callers never receive an empty letter vector.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "outcome", content = "letters", rename_all = "snake_case")]
pub enum LetterOutput {
    Letters(Vec<LetterDocument>),
    NoFindings,
}

impl LetterOutput {
    pub fn letters(&self) -> &[LetterDocument] {
        match self {
            LetterOutput::Letters(letters) => letters,
            LetterOutput::NoFindings => &[],
        }
    }

    pub fn has_letters(&self) -> bool {
        matches!(self, LetterOutput::Letters(_))
    }
}

/// Generate the ordered letter sequence for one analysis run
///
/// Order: one letter per disputable inquiry, then one per
/// personal-info issue, then per account in extraction order a
/// late-payments letter (if any markers) followed independently by a
/// charge-off letter (if flagged). With N bureaus configured, each of
/// the M logical letters is emitted once per bureau, N x M in total;
/// with none, M letters with no bureau header.
pub fn generate(
    analysis: &AnalysisResult,
    config: &LetterConfig,
    today: NaiveDate,
) -> LetterOutput {
    let logical = logical_letters(analysis);
    if logical.is_empty() {
        debug!("no actionable findings, emitting empty-state notice");
        return LetterOutput::NoFindings;
    }

    let mut letters = Vec::new();
    for letter in &logical {
        if config.fan_out() {
            for bureau in &config.bureaus {
                letters.push(address_letter(letter, Some(bureau), &config.sender, today));
            }
        } else {
            letters.push(address_letter(letter, None, &config.sender, today));
        }
    }

    debug!(
        logical = logical.len(),
        letters = letters.len(),
        fan_out = config.fan_out(),
        "generated dispute letters"
    );
    LetterOutput::Letters(letters)
}

/// Render findings into unaddressed letters, in the fixed order
fn logical_letters(analysis: &AnalysisResult) -> Vec<LogicalLetter> {
    let mut letters = Vec::new();

    for inquiry in &analysis.inquiries {
        letters.push(templates::inquiry_letter(inquiry));
    }

    for issue in &analysis.personal_info {
        letters.push(match issue {
            PersonalInfoIssue::MultipleNames(names) => templates::multiple_names_letter(names),
            PersonalInfoIssue::MultipleAddresses(addresses) => {
                templates::multiple_addresses_letter(addresses)
            }
            PersonalInfoIssue::UnverifiedAccount(name) => {
                templates::unverified_account_letter(name)
            }
        });
    }

    for account in &analysis.accounts {
        if !account.late_payments.is_empty() {
            letters.push(templates::late_payments_letter(account));
        }
        if account.charge_off {
            letters.push(templates::charge_off_letter(account));
        }
    }

    letters
}

/// Apply the sender/date header, optional bureau block, and signature
fn address_letter(
    letter: &LogicalLetter,
    bureau: Option<&Bureau>,
    sender: &Sender,
    today: NaiveDate,
) -> LetterDocument {
    let mut body = String::new();

    if let Some(bureau) = bureau {
        body.push_str(&format!(
            "{}\n{}\n{}\n\n{}\n{}\n\n",
            sender.name,
            sender.address,
            today.format("%B %-d, %Y"),
            bureau.name,
            bureau.address
        ));
    }

    body.push_str(&format!("Re: {}\n\n", letter.subject));
    body.push_str(&letter.body);
    body.push_str(&format!("\n\nSincerely,\n{}", sender.name));

    LetterDocument {
        bureau: bureau.map(|b| b.name.clone()),
        subject: letter.subject.clone(),
        body,
    }
}

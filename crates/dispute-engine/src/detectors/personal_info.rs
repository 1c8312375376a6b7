use crate::patterns::{ADDRESS_LINE, NAME_LINE};
use regex::Regex;
use report_types::{AccountRecord, PersonalInfoIssue};

/// Detect identity inconsistencies and unverified accounts
///
/// Must run after account extraction: the unverified-account rule
/// reads the already-extracted account list. Name and address values
/// are collected as first-seen distinct sets; only membership matters
/// downstream.
pub fn detect(text: &str, accounts: &[AccountRecord]) -> Vec<PersonalInfoIssue> {
    let mut findings = Vec::new();

    let names = distinct_values(&NAME_LINE, text);
    if names.len() > 1 {
        findings.push(PersonalInfoIssue::MultipleNames(names));
    }

    let addresses = distinct_values(&ADDRESS_LINE, text);
    if addresses.len() > 1 {
        findings.push(PersonalInfoIssue::MultipleAddresses(addresses));
    }

    for account in accounts {
        let status = account.status.to_lowercase();
        if status.is_empty() || status.contains("unverified") {
            findings.push(PersonalInfoIssue::UnverifiedAccount(account.name.clone()));
        }
    }

    findings
}

/// Collect distinct trimmed capture values in first-seen order
fn distinct_values(pattern: &Regex, text: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for caps in pattern.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            let value = m.as_str().trim().to_string();
            if !value.is_empty() && !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}

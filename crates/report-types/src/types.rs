use chrono::NaiveDate;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportDocument {
    pub filename: String,
    pub page_count: usize,
    pub text: String, // Concatenated page text, page order preserved
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidSsn,
    UnreadableContent,
    ConflictingStatus,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InquiryRecord {
    pub raw_date: String, // Literal date text as matched, e.g. "01/02/2023"
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccountRecord {
    pub name: String,
    pub status: String,             // Free-text status label, empty if absent
    pub late_payments: Vec<String>, // Literal matches, in order of appearance
    pub charge_off: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum PersonalInfoIssue {
    MultipleNames(Vec<String>),
    MultipleAddresses(Vec<String>),
    UnverifiedAccount(String),
}

/// Complete result of one analysis run. Rebuilt from scratch every
/// run; never carried forward or partially updated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub issues: Vec<Issue>,
    pub inquiries: Vec<InquiryRecord>,
    pub accounts: Vec<AccountRecord>,
    pub personal_info: Vec<PersonalInfoIssue>,
    pub analyzed_on: NaiveDate,
}

impl AnalysisResult {
    /// True if any detector produced at least one finding
    pub fn has_findings(&self) -> bool {
        !self.issues.is_empty()
            || !self.inquiries.is_empty()
            || !self.accounts.is_empty()
            || !self.personal_info.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterDocument {
    pub bureau: Option<String>, // Absent in single-letter mode
    pub subject: String,
    pub body: String,
}

//! Shared types for the credit report dispute toolkit
//!
//! Data model used across the loader, analysis engine, and letter
//! generator. Everything here is a plain serde-serializable value;
//! each analysis run produces fresh instances with no shared state.

pub mod types;

pub use types::{
    AccountRecord, AnalysisResult, InquiryRecord, Issue, IssueKind, LetterDocument,
    PersonalInfoIssue, ReportDocument,
};

//! Dispute letter generation
//!
//! Maps the four finding collections of an analysis run onto templated
//! dispute letters, optionally fanned out across the configured credit
//! bureaus, and serializes the letter set into exportable artifacts.
//!
//! Generation is a pure function of the analysis result, the sender
//! and bureau configuration, and the letter date: identical inputs
//! produce an identical ordered letter sequence.

pub mod config;
pub mod export;
pub mod generator;
pub mod templates;

pub use config::{Bureau, LetterConfig, Sender};
pub use generator::{generate, LetterOutput, NO_FINDINGS_NOTICE};

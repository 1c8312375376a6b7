//! Report detectors, one module per finding class
//!
//! Each detector is a pure function of the report text. Only
//! unverified-account detection depends on another detector's output
//! (it reads the extracted account list). Detectors never error:
//! absence of matches yields empty collections.

pub mod accounts;
pub mod inaccuracies;
pub mod inquiries;
pub mod personal_info;

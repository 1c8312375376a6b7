//! Extraction grammar for free-text credit report exports
//!
//! These literals and regexes are the de facto wire format this tool
//! consumes. Changing them changes which reports the detectors
//! recognize, so each pattern keeps the case-sensitivity noted on it.

use lazy_static::lazy_static;
use regex::Regex;

/// Placeholder SSN that never belongs on a real report
pub const INVALID_SSN: &str = "000-00-0000";

/// Garbled-extraction marker left behind by broken text layers
pub const GARBLED_MARKER: &str = "??";

/// Reports shorter than this are treated as unreadable extractions
pub const MIN_READABLE_LEN: usize = 120;

/// Literal markers for the conflicting-status check (case-sensitive)
pub const LATE_MARKER: &str = "30 Days Late";
pub const CURRENT_MARKER: &str = "Status: Current";

lazy_static! {
    /// "Inquiry ... Date: M/D/YY[YY]", case-insensitive. The gap
    /// between the two words is bounded to one line so the lazy
    /// quantifier cannot scan across the whole document.
    pub static ref INQUIRY_DATE: Regex =
        Regex::new(r"(?i)Inquiry[^\r\n]*?Date:?\s*(\d{1,2}/\d{1,2}/\d{2,4})").unwrap();

    /// Start of an account block: "Account Name: <name>" up to end of
    /// line. Case-insensitive.
    pub static ref ACCOUNT_NAME: Regex =
        Regex::new(r"(?i)Account Name:?[ \t]*([^\r\n]*)").unwrap();

    /// Status label within an account block, value up to end of line
    pub static ref ACCOUNT_STATUS: Regex =
        Regex::new(r"(?i)Status:?[ \t]*([^\r\n]*)").unwrap();

    /// Late-payment marker, e.g. "30 Days Late" (case-sensitive)
    pub static ref LATE_PAYMENT: Regex = Regex::new(r"\d{2,3} Days Late").unwrap();

    /// Charge-off marker, hyphen or space separated, case-insensitive
    pub static ref CHARGE_OFF: Regex = Regex::new(r"(?i)Charge[ -]Off").unwrap();

    /// Line-anchored personal info labels. Anchoring keeps longer
    /// labels such as "Account Name:" out of the name scan.
    pub static ref NAME_LINE: Regex = Regex::new(r"(?m)^[ \t]*Name:[ \t]*([^\r\n]+)").unwrap();
    pub static ref ADDRESS_LINE: Regex =
        Regex::new(r"(?m)^[ \t]*Address:[ \t]*([^\r\n]+)").unwrap();
}

//! Inquiry age policy
//!
//! An inquiry is disputable when it is strictly older than four
//! calendar months before the analysis date. The arithmetic is
//! calendar-month subtraction, not a fixed day count: run on March 15
//! the cutoff is November 15 of the prior year. Subtraction clamps to
//! the last valid day of the target month (Mar 31 -> Nov 30).

use chrono::{Months, NaiveDate};

/// Age in calendar months after which an inquiry becomes disputable
pub const DISPUTE_AGE_MONTHS: u32 = 4;

/// The cutoff date: inquiries strictly before this are disputable
pub fn inquiry_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(DISPUTE_AGE_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Whether an inquiry made on `date` is old enough to dispute
pub fn is_disputable(date: NaiveDate, today: NaiveDate) -> bool {
    date < inquiry_cutoff(today)
}

use crate::calendar;
use crate::patterns::INQUIRY_DATE;
use chrono::NaiveDate;
use report_types::InquiryRecord;
use tracing::debug;

/// Extract credit inquiries old enough to dispute
///
/// Scans for every non-overlapping `Inquiry ... Date: M/D/YY[YY]`
/// match and keeps each date strictly older than four calendar months
/// before `today`. Unparseable dates are excluded.
pub fn detect(text: &str, today: NaiveDate) -> Vec<InquiryRecord> {
    let mut inquiries = Vec::new();

    for caps in INQUIRY_DATE.captures_iter(text) {
        let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let Some(date) = parse_report_date(raw) else {
            debug!(raw, "skipping inquiry with unparseable date");
            continue;
        };
        if calendar::is_disputable(date, today) {
            inquiries.push(InquiryRecord {
                raw_date: raw.to_string(),
                date,
            });
        }
    }

    inquiries
}

/// Parse an M/D/YY or M/D/YYYY date as it appears in report text
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let year_width = raw.rsplit('/').next()?.len();
    let format = match year_width {
        4 => "%m/%d/%Y",
        2 => "%m/%d/%y",
        _ => return None,
    };
    NaiveDate::parse_from_str(raw, format).ok()
}

use crate::patterns::{ACCOUNT_NAME, ACCOUNT_STATUS, CHARGE_OFF, LATE_PAYMENT};
use report_types::AccountRecord;

/// Extract account records from the report text
///
/// Each block starts at an `Account Name` label and extends to the
/// next one (or end of text). Blocks are positional: duplicate names
/// are not merged and extraction order is document order.
pub fn detect(text: &str) -> Vec<AccountRecord> {
    let headers: Vec<(usize, String)> = ACCOUNT_NAME
        .captures_iter(text)
        .map(|caps| {
            let start = caps.get(0).unwrap().start();
            let name = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            (start, name)
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(idx, (start, name))| {
            let block_end = headers.get(idx + 1).map(|h| h.0).unwrap_or(text.len());
            parse_block(name.clone(), &text[*start..block_end])
        })
        .collect()
}

/// Parse one account block into a record
fn parse_block(name: String, block: &str) -> AccountRecord {
    // Skip the header line so "Account Name:" itself cannot satisfy
    // the status label match
    let after_header = block
        .find('\n')
        .map(|pos| &block[pos + 1..])
        .unwrap_or_default();

    let status = ACCOUNT_STATUS
        .captures(after_header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let late_payments = LATE_PAYMENT
        .find_iter(block)
        .map(|m| m.as_str().to_string())
        .collect();

    let charge_off = CHARGE_OFF.is_match(block);

    AccountRecord {
        name,
        status,
        late_payments,
        charge_off,
    }
}

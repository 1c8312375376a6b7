//! Letter templates, one render function per finding kind
//!
//! Every template produces a subject naming the dispute type and its
//! identifier, and a body that repeats the disputed facts verbatim and
//! requests either proof or removal/correction. Inquiry letters ask
//! for the signed authorization; account letters ask for the original
//! signed agreement, identification, and a full accounting;
//! personal-info letters ask for verifying documents or removal.
//!
//! Headers (date, sender, bureau address) and the signature block are
//! applied by the generator, not here.

use report_types::{AccountRecord, InquiryRecord};

pub const SALUTATION: &str = "To Whom It May Concern,";

/// A rendered letter before addressing
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalLetter {
    pub subject: String,
    pub body: String,
}

pub fn inquiry_letter(inquiry: &InquiryRecord) -> LogicalLetter {
    LogicalLetter {
        subject: format!(
            "Dispute of Unauthorized Credit Inquiry Dated {}",
            inquiry.raw_date
        ),
        body: format!(
            "{SALUTATION}\n\n\
             I am writing to dispute a credit inquiry on my report dated {date}. I do \
             not recall authorizing this inquiry. Please provide a copy of my signed \
             authorization permitting it, or remove the inquiry from my credit report \
             immediately.",
            date = inquiry.raw_date
        ),
    }
}

pub fn multiple_names_letter(names: &[String]) -> LogicalLetter {
    let list = names.join(", ");
    LogicalLetter {
        subject: format!("Dispute of Inconsistent Name Records: {list}"),
        body: format!(
            "{SALUTATION}\n\n\
             My credit report lists more than one name: {list}. Only one of these is \
             correct. Please provide documents verifying each name on file, or remove \
             the incorrect entries and correct my personal information."
        ),
    }
}

pub fn multiple_addresses_letter(addresses: &[String]) -> LogicalLetter {
    let list = addresses.join("; ");
    LogicalLetter {
        subject: format!("Dispute of Inconsistent Address Records: {list}"),
        body: format!(
            "{SALUTATION}\n\n\
             My credit report lists more than one address: {list}. Please provide \
             documents verifying each address on file, or remove the entries that do \
             not belong to me and correct my personal information."
        ),
    }
}

pub fn unverified_account_letter(account_name: &str) -> LogicalLetter {
    LogicalLetter {
        subject: format!("Request for Verification of Account {account_name}"),
        body: format!(
            "{SALUTATION}\n\n\
             The account {account_name} appears on my credit report without a verified \
             status. Please provide documents verifying this account and its reported \
             standing, or remove it from my credit report."
        ),
    }
}

pub fn late_payments_letter(account: &AccountRecord) -> LogicalLetter {
    let list = account.late_payments.join(", ");
    LogicalLetter {
        subject: format!("Dispute of Late Payments on Account {}", account.name),
        body: format!(
            "{SALUTATION}\n\n\
             I dispute the following late payment entries reported on the account \
             {name}: {list}. Please provide the original signed agreement for this \
             account, proof of my identification, and a complete accounting of the \
             payment history, or remove these entries from my credit report.",
            name = account.name
        ),
    }
}

pub fn charge_off_letter(account: &AccountRecord) -> LogicalLetter {
    LogicalLetter {
        subject: format!("Dispute of Charge-Off on Account {}", account.name),
        body: format!(
            "{SALUTATION}\n\n\
             I dispute the charge-off reported on the account {name}. Please provide \
             the original signed agreement for this account, proof of my \
             identification, and a complete accounting showing how the charged-off \
             balance was calculated, or remove the charge-off from my credit report.",
            name = account.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_inquiry_letter_carries_date_verbatim() {
        let inquiry = InquiryRecord {
            raw_date: "01/02/2023".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        };
        let letter = inquiry_letter(&inquiry);
        assert!(letter.subject.contains("01/02/2023"));
        assert!(letter.body.contains("01/02/2023"));
        assert!(letter.body.contains("signed"));
        assert!(letter.body.starts_with(SALUTATION));
    }

    #[test]
    fn test_names_letter_lists_every_value() {
        let names = vec!["John Doe".to_string(), "Jon Doe".to_string()];
        let letter = multiple_names_letter(&names);
        for name in &names {
            assert!(letter.body.contains(name));
        }
        assert!(letter.body.contains("remove") || letter.body.contains("correct"));
    }

    #[test]
    fn test_late_payments_letter_lists_markers_in_order() {
        let account = AccountRecord {
            name: "First Premier Card".to_string(),
            status: "Current".to_string(),
            late_payments: vec!["30 Days Late".to_string(), "60 Days Late".to_string()],
            charge_off: false,
        };
        let letter = late_payments_letter(&account);
        assert!(letter.body.contains("First Premier Card"));
        assert!(letter.body.contains("30 Days Late, 60 Days Late"));
        assert!(letter.body.contains("original signed agreement"));
        assert!(letter.body.contains("identification"));
        assert!(letter.body.contains("accounting"));
    }

    #[test]
    fn test_charge_off_letter_names_the_account() {
        let account = AccountRecord {
            name: "Acme Auto Loan".to_string(),
            status: String::new(),
            late_payments: vec![],
            charge_off: true,
        };
        let letter = charge_off_letter(&account);
        assert!(letter.subject.contains("Charge-Off"));
        assert!(letter.body.contains("Acme Auto Loan"));
        assert!(letter.body.contains("remove"));
    }

    #[test]
    fn test_unverified_letter_requests_proof_or_removal() {
        let letter = unverified_account_letter("Mystery Card");
        assert!(letter.body.contains("Mystery Card"));
        assert!(letter.body.contains("verifying"));
        assert!(letter.body.contains("remove"));
    }
}

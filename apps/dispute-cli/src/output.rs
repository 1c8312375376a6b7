//! Text renderers for the findings and letters views

use letter_engine::{LetterOutput, NO_FINDINGS_NOTICE};
use report_types::{AnalysisResult, PersonalInfoIssue, ReportDocument};

/// Render the findings view for one analysis run
pub fn render_findings(document: &ReportDocument, analysis: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Credit Report Analysis: {}\n", document.filename));
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");
    output.push_str(&format!(
        "Analyzed on {} ({} page{})\n\n",
        analysis.analyzed_on,
        document.page_count,
        if document.page_count == 1 { "" } else { "s" }
    ));

    if !analysis.has_findings() {
        output.push_str("No anomalies detected.\n");
        return output;
    }

    if !analysis.issues.is_empty() {
        push_section(&mut output, "General Inaccuracies");
        for issue in &analysis.issues {
            output.push_str(&format!("- {}\n", issue.message));
        }
        output.push('\n');
    }

    if !analysis.inquiries.is_empty() {
        push_section(&mut output, "Disputable Inquiries");
        for inquiry in &analysis.inquiries {
            output.push_str(&format!("- Inquiry dated {}\n", inquiry.raw_date));
        }
        output.push('\n');
    }

    if !analysis.accounts.is_empty() {
        push_section(&mut output, "Accounts");
        for account in &analysis.accounts {
            let status = if account.status.is_empty() {
                "(no status)"
            } else {
                account.status.as_str()
            };
            output.push_str(&format!("- {} [{}]\n", account.name, status));
            if !account.late_payments.is_empty() {
                output.push_str(&format!(
                    "    Late payments: {}\n",
                    account.late_payments.join(", ")
                ));
            }
            if account.charge_off {
                output.push_str("    Charge-off reported\n");
            }
        }
        output.push('\n');
    }

    if !analysis.personal_info.is_empty() {
        push_section(&mut output, "Personal Information");
        for issue in &analysis.personal_info {
            match issue {
                PersonalInfoIssue::MultipleNames(names) => {
                    output.push_str(&format!("- Multiple names on file: {}\n", names.join(", ")));
                }
                PersonalInfoIssue::MultipleAddresses(addresses) => {
                    output.push_str(&format!(
                        "- Multiple addresses on file: {}\n",
                        addresses.join("; ")
                    ));
                }
                PersonalInfoIssue::UnverifiedAccount(name) => {
                    output.push_str(&format!("- Unverified account: {}\n", name));
                }
            }
        }
        output.push('\n');
    }

    output
}

/// Render the letters view
pub fn render_letters(letters: &LetterOutput) -> String {
    match letters {
        LetterOutput::NoFindings => format!("{NO_FINDINGS_NOTICE}\n"),
        LetterOutput::Letters(list) => {
            let mut output = String::new();
            output.push_str(&format!("Dispute Letters ({})\n", list.len()));
            output.push_str(&"=".repeat(60));
            output.push_str("\n\n");
            for (i, letter) in list.iter().enumerate() {
                output.push_str(&format!("Letter {}: {}\n", i + 1, letter.subject));
                if let Some(bureau) = &letter.bureau {
                    output.push_str(&format!("Addressed to: {}\n", bureau));
                }
                output.push_str(&"-".repeat(40));
                output.push('\n');
                output.push_str(&letter.body);
                output.push_str("\n\n");
            }
            output
        }
    }
}

fn push_section(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(40));
    output.push('\n');
}

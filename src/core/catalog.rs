//! Category catalog: descriptions and one sample email per category

use serde::Serialize;

use crate::core::RuleRepository;
use crate::types::EmailInput;
use crate::LABEL_NONE;

const NONE_DESCRIPTION: &str = "No actionable request detected in the content.";

/// Listed category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub value: String,
    pub description: String,
}

/// Sample email with the label it should receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub category: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
}

impl Sample {
    /// Request payload for this sample, debug scores on
    pub fn payload(&self) -> EmailInput {
        EmailInput::new(self.subject, self.body).with_debug(true)
    }
}

/// Every category of `rules` in declaration order, then `none`
pub fn categories(rules: &RuleRepository) -> Vec<CategoryInfo> {
    rules
        .iter()
        .map(|rule| CategoryInfo {
            value: rule.name.clone(),
            description: rule.description.clone(),
        })
        .chain(std::iter::once(CategoryInfo {
            value: LABEL_NONE.to_string(),
            description: NONE_DESCRIPTION.to_string(),
        }))
        .collect()
}

/// Smoke-test samples for the built-in table
pub fn samples() -> &'static [Sample] {
    SAMPLES
}

const SAMPLES: &[Sample] = &[
    Sample {
        category: "invoice_payment",
        subject: "Invoice #INV-4521 — Payment Due",
        body: "Dear Finance Team, please find the invoice attached for services rendered in March. \
               The amount due is $12,500. Kindly remit payment to the bank details provided in the \
               attachment before the due date. Please settle the amount at the earliest.",
    },
    Sample {
        category: "wire_transfer",
        subject: "Urgent Wire Transfer Required",
        body: "Hi, I need you to initiate a transfer of $45,000 to our new vendor account immediately. \
               Please use the following routing number and account number provided below. This is \
               time sensitive, please transfer funds today.",
    },
    Sample {
        category: "gift_card_request",
        subject: "Quick Favour Needed",
        body: "Hey, are you available? I need you to purchase 5 Amazon gift cards worth $200 each for \
               a client reward program. Please buy the cards and send me the redemption codes. Keep \
               this confidential for now, I'll explain later.",
    },
    Sample {
        category: "credential_request",
        subject: "Your Account Has Been Suspended — Action Required",
        body: "We have detected unusual activity on your account. Your email has been suspended. \
               Please confirm your account by verifying your login credentials. Sign in to verify \
               your identity here and enter your username and password to restore access.",
    },
    Sample {
        category: "sensitive_data_request",
        subject: "Urgent: Employee W-2 Forms Required for Audit",
        body: "Hi, as part of our annual compliance audit, we urgently need the W-2 tax forms for all \
               employees along with the full employee list and salary details. The finance team \
               needs this by end of day. Please send us the documents at your earliest convenience.",
    },
    Sample {
        category: "document_download",
        subject: "Please Review and Sign the Contract",
        body: "Hello, please find your contract ready for review via DocuSign. Click to download the \
               document and open the attachment to review all terms. Please open attached file and \
               complete your signature today.",
    },
    Sample {
        category: "link_click",
        subject: "Action Required: Verify Your Microsoft Account",
        body: "Your Microsoft 365 account requires immediate attention. Please click here to verify \
               your account: http://microsoft-verify.suspicious-domain.com/verify. Click the link \
               below and confirm now to avoid service interruption.",
    },
    Sample {
        category: "urgent_callback",
        subject: "URGENT: Your Account Will Be Closed",
        body: "This is your final notice. Your bank account shows suspicious activity and will be \
               frozen within 24 hours. Please call us immediately at +1-800-555-0199 to prevent \
               account closure. Failure to respond will result in permanent suspension.",
    },
    Sample {
        category: "bank_detail_update",
        subject: "Important: Updated Banking Information",
        body: "Please be advised that we have updated our banking information effective immediately. \
               Please update bank details in your system with the new account number and routing \
               number provided. Kindly update your records before processing the next payment.",
    },
    Sample {
        category: "invoice_verification",
        subject: "Approval Needed: Pending Invoice #7731",
        body: "Hi, this pending invoice from our supplier is awaiting your confirmation. The payment \
               on hold will be released once you verify the invoice. Authorization required from \
               the CFO office, please approve this invoice today.",
    },
    Sample {
        category: "legal_threat",
        subject: "Notice of Legal Action — Immediate Response Required",
        body: "You are hereby notified that legal action will be filed against your organization for \
               non-compliance with contract terms. Our attorney has been instructed to initiate legal \
               proceedings unless you respond within 48 hours. Failure to comply will result in a \
               formal lawsuit and damages claim.",
    },
    Sample {
        category: "executive_request",
        subject: "Confidential — Action Needed Immediately",
        body: "This is on behalf of the CEO. The CEO has requested that you handle this immediately \
               and process a payment before close of business today. Please keep this confidential \
               and do not discuss with other team members. Leadership has directed this to be top \
               priority.",
    },
    Sample {
        category: "vpn_or_mfa_reset",
        subject: "Action Required: Approve Your MFA Reset",
        body: "A new device has been detected signing into your corporate account. Please approve the \
               login by entering the 2FA code sent to your authenticator app. If you did not initiate \
               this, please provide your OTP code to our security team immediately to secure your \
               account.",
    },
    Sample {
        category: "meeting_request",
        subject: "You Have Been Invited to an Urgent Meeting",
        body: "You have been invited to an urgent executive meeting. Please join here for the meeting: \
               http://zoom-meeting-login.phishing-site.net/join. Meeting ID: 845-291-0022. Click to \
               join the video conference immediately. This is an urgent meeting — your presence is \
               required.",
    },
    Sample {
        category: "none",
        subject: "Team Lunch This Friday",
        body: "Hi everyone, just a reminder that we have a team lunch this Friday at 1pm at the usual \
               restaurant. Please let me know if you can make it. Looking forward to seeing everyone!",
    },
];

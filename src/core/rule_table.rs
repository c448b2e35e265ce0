//! Built-in rule table
//!
//! Declaration order is significant: equal scores are won by the category
//! declared first.

use crate::types::{PatternDef, RuleDef};

pub const BUILTIN_RULES: &[RuleDef] = &[
    // =========================================================================
    // Payments
    // =========================================================================
    RuleDef {
        name: "invoice_payment",
        description: "Request to pay a fake invoice, often with fake bank details.",
        threshold: 10,
        primary: &[
            ("pay the invoice", 10),
            ("payment due", 9),
            ("outstanding invoice", 9),
            ("remit payment", 10),
            ("settle the amount", 9),
            ("invoice attached", 8),
            ("amount due", 8),
            ("balance due", 8),
            ("kindly make payment", 9),
            ("process the payment", 8),
        ],
        supporting: &[
            ("bank details", 4),
            ("wire", 3),
            ("transfer funds", 4),
            ("overdue", 3),
            ("before due date", 3),
            ("attached invoice", 3),
            ("invoice number", 2),
        ],
        negative: &[
            ("payment received", -8),
            ("thank you for your payment", -8),
            ("payment confirmed", -7),
            ("receipt", -3),
        ],
        patterns: &[],
    },
    RuleDef {
        name: "wire_transfer",
        description: "Direct request for a money transfer to attacker-controlled accounts.",
        threshold: 10,
        primary: &[
            ("wire transfer", 10),
            ("transfer funds", 9),
            ("send money", 8),
            ("bank transfer", 9),
            ("transfer the amount", 9),
            ("initiate a transfer", 10),
            ("initiate transfer", 9),
            ("swift transfer", 10),
            ("make a transfer", 9),
        ],
        supporting: &[
            ("urgently", 3),
            ("today", 2),
            ("immediately", 3),
            ("account number", 4),
            ("routing number", 4),
            ("iban", 4),
            ("swift code", 4),
            ("beneficiary", 3),
        ],
        negative: &[
            ("transfer complete", -6),
            ("transfer confirmed", -6),
        ],
        patterns: &[],
    },
    RuleDef {
        name: "gift_card_request",
        description: "Asking employee to purchase gift cards (common in impersonation attacks).",
        threshold: 10,
        primary: &[
            ("gift card", 10),
            ("itunes card", 10),
            ("amazon gift card", 10),
            ("google play card", 10),
            ("steam gift card", 10),
            ("purchase gift cards", 10),
            ("buy gift cards", 10),
            ("e-gift", 8),
            ("buy cards", 7),
        ],
        supporting: &[
            ("send the codes", 6),
            ("scratch and send", 6),
            ("keep confidential", 3),
            ("don't tell", 3),
            ("send me the numbers", 4),
            ("pin code", 3),
            ("redemption code", 5),
        ],
        negative: &[
            ("gift card balance", -5),
            ("gift card reward", -4),
        ],
        patterns: &[],
    },
    // =========================================================================
    // Credentials and data
    // =========================================================================
    RuleDef {
        name: "credential_request",
        description: "Asks user to send or reset account login credentials.",
        threshold: 10,
        primary: &[
            ("send your password", 10),
            ("confirm your credentials", 10),
            ("verify your login", 10),
            ("reset your password", 9),
            ("enter your username", 9),
            ("account verification required", 9),
            ("sign in to verify", 10),
            ("confirm your account", 9),
            ("provide your credentials", 10),
            ("submit your login", 9),
        ],
        supporting: &[
            ("account suspended", 4),
            ("unusual activity", 3),
            ("click here to verify", 4),
            ("your email has been suspended", 5),
            ("security alert", 3),
            ("verify your identity", 4),
        ],
        negative: &[
            ("password reset complete", -6),
            ("your password has been changed", -6),
        ],
        patterns: &[],
    },
    RuleDef {
        name: "sensitive_data_request",
        description: "Requests HR/financial info like tax forms, salary slips, or employee lists.",
        threshold: 10,
        primary: &[
            ("w-2", 10),
            ("form 16", 10),
            ("tax form", 9),
            ("salary slip", 10),
            ("employee list", 10),
            ("payroll data", 10),
            ("social security number", 10),
            ("pan number", 9),
            ("employee records", 9),
            ("compensation details", 9),
            ("salary details", 9),
        ],
        supporting: &[
            ("hr request", 4),
            ("audit", 3),
            ("compliance", 3),
            ("finance team needs", 4),
            ("send us the", 3),
            ("please provide", 3),
        ],
        negative: &[],
        patterns: &[],
    },
    // =========================================================================
    // Files and links
    // =========================================================================
    RuleDef {
        name: "document_download",
        description: "Requests user to click/download a potentially malicious file.",
        threshold: 8,
        primary: &[
            ("download the document", 10),
            ("open the attachment", 9),
            ("click to download", 10),
            ("review the attached", 8),
            ("access the document", 9),
            ("download now", 8),
            ("open attached file", 9),
            ("view the document", 8),
            ("download file", 8),
        ],
        supporting: &[
            ("pdf", 2),
            ("docusign", 4),
            ("shared file", 3),
            ("onedrive", 3),
            ("dropbox", 3),
            ("google drive", 3),
            ("see attached", 3),
            ("attachment", 2),
        ],
        negative: &[],
        patterns: &[],
    },
    RuleDef {
        name: "link_click",
        description: "Asks user to visit a suspicious link, often disguised as internal services.",
        threshold: 9,
        primary: &[
            ("click here", 8),
            ("click the link", 9),
            ("follow this link", 9),
            ("click below", 8),
            ("click on the link", 9),
            ("visit our", 7),
            ("go to this link", 9),
            ("access your account at", 9),
            ("log in here", 9),
        ],
        supporting: &[
            ("action required", 3),
            ("verify now", 4),
            ("confirm now", 3),
            ("bit.ly", 5),
            ("tinyurl", 5),
            ("link below", 3),
            ("update your account", 3),
        ],
        negative: &[
            ("do not click", -8),
            ("never click", -8),
            ("unsubscribe", -2),
        ],
        patterns: &[
            // Long URL not on a well-known vendor domain
            PatternDef::new(r"https?://(?!(?:www\.)?(microsoft|google|apple|amazon)\.com)[^\s]{15,}", 3),
            PatternDef::new(r"bit\.ly/|tinyurl\.com|t\.co/|goo\.gl/", 5),
        ],
    },
    // =========================================================================
    // Pressure
    // =========================================================================
    RuleDef {
        name: "urgent_callback",
        description: "Demands user to call a number urgently — may connect to attacker.",
        threshold: 9,
        primary: &[
            ("call us immediately", 10),
            ("call back urgently", 10),
            ("please call", 7),
            ("contact us at", 6),
            ("reach us on", 7),
            ("call now", 8),
            ("dial this number", 9),
            ("phone us", 7),
        ],
        supporting: &[
            ("urgent", 3),
            ("immediately", 3),
            ("your account will be closed", 5),
            ("within 24 hours", 3),
            ("failure to respond", 4),
            ("last warning", 4),
        ],
        negative: &[],
        patterns: &[
            PatternDef::new(r"(?:call|contact|reach|dial).{0,30}\+?[\d\s\-\(\)]{7,15}", 6),
            PatternDef::new(r"\+?1[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}", 5),
        ],
    },
    RuleDef {
        name: "bank_detail_update",
        description: "Asks to change vendor or payroll bank details to attacker's account.",
        threshold: 10,
        primary: &[
            ("update bank details", 10),
            ("new bank account", 9),
            ("change payment details", 10),
            ("updated account number", 10),
            ("new routing number", 10),
            ("please update your records", 9),
            ("new banking information", 10),
            ("change bank account", 10),
            ("update our banking", 10),
        ],
        supporting: &[
            ("effective immediately", 4),
            ("vendor change", 3),
            ("payroll update", 4),
            ("new account details", 4),
            ("please make note", 3),
        ],
        negative: &[],
        patterns: &[],
    },
    RuleDef {
        name: "invoice_verification",
        description: "Pretends to verify a pending invoice or payment as an authority.",
        threshold: 10,
        primary: &[
            ("verify the invoice", 10),
            ("confirm payment status", 9),
            ("invoice approval needed", 10),
            ("awaiting your confirmation", 9),
            ("payment on hold", 9),
            ("pending invoice", 8),
            ("approve this invoice", 10),
            ("authorize this payment", 10),
        ],
        supporting: &[
            ("authorization required", 4),
            ("cfo", 3),
            ("accounts payable", 3),
            ("pending approval", 4),
            ("release payment", 4),
        ],
        negative: &[
            ("invoice verified", -6),
            ("payment approved", -5),
        ],
        patterns: &[],
    },
    RuleDef {
        name: "legal_threat",
        description: "Uses legal urgency or false subpoenas to manipulate behavior.",
        threshold: 10,
        primary: &[
            ("legal action", 10),
            ("lawsuit", 10),
            ("subpoena", 10),
            ("court order", 10),
            ("failure to comply", 9),
            ("legal proceedings", 10),
            ("summons", 9),
            ("violation notice", 9),
            ("file a lawsuit", 10),
            ("attorney has been instructed", 10),
        ],
        supporting: &[
            ("within 48 hours", 4),
            ("failure to respond", 4),
            ("damages", 3),
            ("compliance required", 3),
            ("attorney", 3),
            ("legal department", 3),
        ],
        negative: &[],
        patterns: &[],
    },
    RuleDef {
        name: "executive_request",
        description: "Generic directive from CEO or VIP demanding immediate action.",
        threshold: 9,
        primary: &[
            ("ceo has requested", 10),
            ("on behalf of the ceo", 10),
            ("per the director", 9),
            ("executive team requires", 10),
            ("the president needs", 9),
            ("board has approved", 9),
            ("as per ceo instructions", 10),
            ("ceo wants you to", 10),
            ("management has approved", 8),
            ("leadership has directed", 9),
        ],
        supporting: &[
            ("confidential", 3),
            ("do not discuss", 4),
            ("handle immediately", 4),
            ("bypass normal process", 5),
            ("top priority", 3),
            ("directly to me", 3),
        ],
        negative: &[],
        patterns: &[],
    },
    // =========================================================================
    // Access
    // =========================================================================
    RuleDef {
        name: "vpn_or_mfa_reset",
        description: "Tries to capture multi-factor credentials or VPN access.",
        threshold: 9,
        primary: &[
            ("mfa reset", 10),
            ("two-factor authentication", 9),
            ("2fa code", 10),
            ("authenticator app", 9),
            ("vpn access", 9),
            ("security token", 9),
            ("one-time password", 9),
            ("otp code", 9),
            ("approve the login", 10),
            ("approve sign-in request", 10),
        ],
        supporting: &[
            ("new device detected", 4),
            ("unusual sign-in", 4),
            ("your account requires verification", 4),
            ("enter the code", 3),
            ("6-digit code", 4),
            ("verify your device", 4),
        ],
        negative: &[],
        patterns: &[],
    },
    RuleDef {
        name: "meeting_request",
        description: "Fakes calendar invites with malicious links (spear phishing).",
        threshold: 9,
        primary: &[
            ("join the meeting", 9),
            ("meeting invitation", 8),
            ("you have been invited", 8),
            ("join zoom", 9),
            ("zoom meeting link", 9),
            ("teams meeting", 8),
            ("google meet", 8),
            ("join video conference", 9),
            ("join here for the meeting", 10),
        ],
        supporting: &[
            ("click to join", 4),
            ("meeting id", 3),
            ("passcode", 3),
            ("reschedule", 2),
            ("urgent meeting", 4),
            ("calendar invite", 3),
        ],
        negative: &[
            ("meeting cancelled", -5),
        ],
        patterns: &[
            // Meeting-looking URL off the real conferencing hosts
            PatternDef::new(
                r"https?://(?!zoom\.us|teams\.microsoft\.com|meet\.google\.com)[^\s]+(?:zoom|meet|meeting|conference)[^\s]*",
                5,
            ),
        ],
    },
];

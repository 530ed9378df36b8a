/// Link analysis criteria — single source of truth for the report prompt.
pub const CRITERIA: &str = "\
1. Phishing patterns (typosquatting, lookalike domains).\n\
2. Known malicious TLDs.\n\
3. Shortened URL obfuscation.\n\
4. Suspicious subdomains.";

/// Follow-up instruction for redirect services.
pub const SHORTLINK_HINT: &str = "\
If it's a shortened URL (like bit.ly, t.co), infer what the destination might be \
if possible or explain why it's used.";

/// Themes the seasonal tips are asked to cover.
pub const TIP_THEMES: [&str; 3] = [
    "avoiding delivery scams",
    "fake giveaway links",
    "secure digital transactions",
];

pub const TIP_COUNT: usize = 5;

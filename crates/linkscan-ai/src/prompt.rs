use linkscan_core::criteria::{CRITERIA, SHORTLINK_HINT, TIP_COUNT, TIP_THEMES};

pub const REPORT_SCHEMA_NAME: &str = "security_report";
pub const TIPS_SCHEMA_NAME: &str = "security_tips";

/// Instruction for the report requester. The URL is embedded verbatim.
pub fn report_prompt(url: &str) -> String {
    format!(
        "Analyze the following URL for potential fraud, phishing, or security risks.\n\
URL: {url}\n\n\
Check for:\n{CRITERIA}\n\n\
{SHORTLINK_HINT}"
    )
}

pub fn tips_prompt() -> String {
    let (last, rest) = TIP_THEMES
        .split_last()
        .map(|(last, rest)| (*last, rest.join(", ")))
        .unwrap_or_default();
    format!(
        "Provide {TIP_COUNT} creative and concise cybersecurity tips specifically for the \
New Year holiday season, focusing on {rest}, and {last}. \
Return as a JSON array of strings."
    )
}

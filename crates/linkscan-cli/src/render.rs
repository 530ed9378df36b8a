use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use linkscan_core::{RiskLevel, SecurityReport};

fn badge_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Safe => Color::Green,
        RiskLevel::Low => Color::Blue,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::DarkYellow,
        RiskLevel::Critical => Color::Red,
    }
}

fn badge(level: RiskLevel, color: bool) -> String {
    let text = format!("[{}]", level.label());
    if color {
        text.with(badge_color(level)).bold().to_string()
    } else {
        text
    }
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn push_list(out: &mut String, title: &str, items: &[String], color: bool) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", heading(title, color));
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

/// Terminal rendering of one report.
pub(crate) fn render_report(url: &str, report: &SecurityReport, color: bool) -> String {
    let mut out = String::with_capacity(512);
    let verdict = if report.is_safe {
        "Looks safe"
    } else {
        "Potentially dangerous"
    };
    let _ = writeln!(out, "{} {}", badge(report.risk_level, color), heading(verdict, color));
    let _ = writeln!(out, "URL: {url}");
    if report.risk_level.is_elevated() {
        let warning = "Do not open this link.";
        let warning = if color {
            warning.with(Color::Red).bold().to_string()
        } else {
            warning.to_string()
        };
        let _ = writeln!(out, "{warning}");
    }
    if let Some(dest) = report.original_url.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "Probable destination: {dest}");
    }
    let _ = writeln!(out, "\n{}", report.explanation);
    push_list(&mut out, "Detected threats", &report.detected_threats, color);
    push_list(&mut out, "Recommendations", &report.recommendations, color);
    out
}

pub(crate) fn render_tips(tips: &[String]) -> String {
    if tips.is_empty() {
        return "No tips available right now.\n".to_string();
    }
    tips.iter()
        .enumerate()
        .fold(String::new(), |mut out, (i, tip)| {
            let _ = writeln!(out, "{}. {tip}", i + 1);
            out
        })
}

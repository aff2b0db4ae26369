//! Update banner.

use super::{detect_install_method, UpdateInfo};
use crate::ui::AutonodeTheme;

/// Render the boxed notice for an available update.
///
/// Returns plain text; coloring is applied when printing.
pub fn render_banner(info: &UpdateInfo, upgrade_hint: &str) -> String {
    let lines = [
        "A new version of autonode is available!".to_string(),
        format!("Current: {} → Latest: {}", info.current, info.latest),
        upgrade_hint.to_string(),
    ];

    let max_len = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = max_len + 4;

    let mut out = String::new();
    out.push('╭');
    out.push_str(&"─".repeat(width));
    out.push_str("╮\n");

    for line in &lines {
        let padding = width - line.chars().count() - 1;
        out.push_str("│ ");
        out.push_str(line);
        out.push_str(&" ".repeat(padding));
        out.push_str("│\n");
    }

    out.push('╰');
    out.push_str(&"─".repeat(width));
    out.push('╯');
    out
}

/// Print the banner to stderr when an update is available.
pub fn show_update_banner(info: &UpdateInfo) {
    if !info.update_available {
        return;
    }

    let hint = detect_install_method().upgrade_hint();
    eprintln!();
    let theme = AutonodeTheme::detect();
    eprintln!("{}", theme.border.apply_to(render_banner(info, &hint)));
}

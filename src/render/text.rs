//! Plain-text terminal report.

use crate::summary::Summary;

use super::{fmt_count, fmt_opt_date, fmt_pct};

/// Width of the boxed header, in columns.
const WIDTH: usize = 60;

/// Width of the language share bar, in glyphs.
const BAR_WIDTH: usize = 20;

/// Render a boxed, fixed-width report suitable for printing to a terminal.
pub fn render(s: &Summary) -> String {
    let bar = "─".repeat(WIDTH);
    let title = truncate(&format!("{} · GitHub summary", s.display_name), WIDTH - 3);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("┌{bar}┐\n"));
    out.push_str(&format!("│  {title:<width$}│\n", width = WIDTH - 2));
    out.push_str(&format!("└{bar}┘\n\n"));

    let counters = [
        ("Contributions", s.total_contributions, "  (past year)"),
        ("Commits", s.commits, ""),
        ("Pull requests", s.pull_requests, ""),
        ("Issues", s.issues, ""),
        ("Stars", s.stars, ""),
        ("Contributed to", s.contributed_to, "  repos"),
    ];
    for (label, value, suffix) in counters {
        out.push_str(&format!("  {label:<14} {:>9}{suffix}\n", fmt_count(value)));
    }
    out.push_str(&format!(
        "  Streak         current {} d  ·  longest {} d ({} – {})\n",
        s.current_streak,
        s.streak.max_streak,
        fmt_opt_date(s.streak.longest_start),
        fmt_opt_date(s.streak.longest_end),
    ));
    out.push_str(&format!(
        "  Rank           {} {}  (score {:.2})\n",
        s.score.rank.icon(),
        s.score.rank,
        s.score.score,
    ));

    if !s.languages.is_empty() {
        out.push_str("\n  Top languages\n");
        for l in &s.languages {
            let filled = ((l.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
            out.push_str(&format!(
                "    {:<16} {:<bw$} {:>5}%  ({} repos)\n",
                truncate(&l.language, 16),
                "█".repeat(filled.min(BAR_WIDTH)),
                fmt_pct(l.percentage),
                l.count,
                bw = BAR_WIDTH,
            ));
        }
    }

    out.push('\n');
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_owned()
    } else {
        let mut t: String = s.chars().take(max - 1).collect();
        t.push('…');
        t
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

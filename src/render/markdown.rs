//! Markdown report renderer.

use anyhow::Result;
use minijinja::Environment;
use serde::Serialize;

use crate::summary::Summary;

use super::{fmt_count, fmt_opt_date, fmt_pct};

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// The minijinja template that produces the markdown report.
///
/// Renders well on GitHub and stays readable as raw text; kept inline so the
/// binary has no asset paths to resolve.
const TEMPLATE: &str = r#"## {{ name }} · GitHub Summary

| | |
|:--|--:|
| Contributions (past year) | **{{ total_contributions }}** |
| Commits | **{{ commits }}** |
| Private contributions | **{{ private_contributions }}** |
| Pull requests | **{{ pull_requests }}** |
| Issues | **{{ issues }}** |
| Stars | **{{ stars }}** |
| Contributed to | **{{ contributed_to }}** repos |
| Longest streak | **{{ max_streak }} days** ({{ streak_start }} – {{ streak_end }}) |
| Current streak | **{{ current_streak }} days** |
| Overall rank | {{ rank_icon }} **{{ rank }}** (score {{ score }}) |
{% if languages %}

**Top languages**

| Language | Repos | Share |
|:---------|------:|------:|
{% for l in languages %}| {{ l.name }} | {{ l.count }} | {{ l.pct }}% |
{% endfor %}
{% endif %}

---

_Generated {{ generated_at }} for [@{{ login }}](https://github.com/{{ login }})_
"#;

// ---------------------------------------------------------------------------
// Context types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct LanguageRow {
    name: String,
    count: u32,
    pct: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the markdown report for a computed [`Summary`].
pub fn render(s: &Summary) -> Result<String> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    let languages: Vec<LanguageRow> = s
        .languages
        .iter()
        .map(|l| LanguageRow {
            name: escape_cell(&l.language),
            count: l.count,
            pct: fmt_pct(l.percentage),
        })
        .collect();

    let generated_at = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let ctx = minijinja::context! {
        name                  => escape_cell(&s.display_name),
        login                 => s.login.as_str(),
        total_contributions   => fmt_count(s.total_contributions),
        commits               => fmt_count(s.commits),
        private_contributions => fmt_count(s.private_contributions),
        pull_requests         => fmt_count(s.pull_requests),
        issues                => fmt_count(s.issues),
        stars                 => fmt_count(s.stars),
        contributed_to        => fmt_count(s.contributed_to),
        max_streak            => s.streak.max_streak,
        streak_start          => fmt_opt_date(s.streak.longest_start),
        streak_end            => fmt_opt_date(s.streak.longest_end),
        current_streak        => s.current_streak,
        rank                  => s.score.rank.label(),
        rank_icon             => s.score.rank.icon(),
        score                 => format!("{:.2}", s.score.score),
        languages             => languages,
        generated_at          => generated_at,
    };

    Ok(env.render_str(TEMPLATE, ctx)?)
}

/// Escape pipes so user-supplied text can't split a table row.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! SVG card renderer for ghsummary.
//!
//! Produces a self-contained SVG that can be embedded in a GitHub profile
//! README as `<img src="summary.svg">`.  Colours come from CSS variables; the
//! `auto` theme adds a `prefers-color-scheme` media query to switch between
//! the light and dark palettes.

use anyhow::Result;

use super::{dash_offset, escape_xml, fmt_count, fmt_opt_date, fmt_pct, GAUGE_DASHARRAY};
use crate::error::Error;
use crate::summary::{LanguageShare, Summary};

// ---------------------------------------------------------------------------
// Palette & Theme
// ---------------------------------------------------------------------------

/// A complete colour palette for one display mode (light or dark).
pub struct Palette {
    pub bg: &'static str,
    pub border: &'static str,
    pub title: &'static str,
    /// Section headings and gauge captions.
    pub heading: &'static str,
    /// Stat labels ("Stars:", "PRs:" …).
    pub label: &'static str,
    /// Stat values.
    pub value: &'static str,
}

/// A theme is either a pair of palettes (auto light/dark via CSS) or a single
/// fixed palette.
pub enum Theme {
    Auto { light: Palette, dark: Palette },
    Fixed(Palette),
}

static LIGHT: Theme = Theme::Fixed(Palette {
    bg: "#ffffff",
    border: "#cccccc",
    title: "#003366",
    heading: "#003366",
    label: "#008000",
    value: "#000000",
});

static DARK: Theme = Theme::Fixed(Palette {
    bg: "#0d1117",
    border: "#30363d",
    title: "#c9d1d9",
    heading: "#58a6ff",
    label: "#3fb950",
    value: "#e6edf3",
});

static AUTO: Theme = Theme::Auto {
    light: Palette {
        bg: "#ffffff",
        border: "#cccccc",
        title: "#003366",
        heading: "#003366",
        label: "#008000",
        value: "#000000",
    },
    dark: Palette {
        bg: "#0d1117",
        border: "#30363d",
        title: "#c9d1d9",
        heading: "#58a6ff",
        label: "#3fb950",
        value: "#e6edf3",
    },
};

/// Look up a built-in theme by CLI name.
pub fn theme_by_name(name: &str) -> Result<&'static Theme> {
    match name {
        "light" => Ok(&LIGHT),
        "dark" => Ok(&DARK),
        "auto" => Ok(&AUTO),
        other => Err(Error::UnknownTheme(other.to_owned()).into()),
    }
}

// ---------------------------------------------------------------------------
// Language colours
// ---------------------------------------------------------------------------

/// Bar colour for well-known languages.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "gold"),
    ("Python", "skyblue"),
    ("CSS", "rebeccapurple"),
    ("HTML", "orangered"),
    ("Java", "saddlebrown"),
    ("SCSS", "hotpink"),
    ("TypeScript", "deepskyblue"),
    ("Shell", "gray"),
    ("Go", "turquoise"),
    ("Ruby", "crimson"),
    ("Rust", "#dea584"),
];

/// Colour for languages missing from [`LANGUAGE_COLORS`].
const FALLBACK_LANGUAGE_COLOR: &str = "#8b949e";

pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map_or(FALLBACK_LANGUAGE_COLOR, |(_, color)| *color)
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Rendering options passed to [`render`].
pub struct SvgOptions<'a> {
    /// Theme name (default `"light"`).
    pub theme: &'a str,
}

impl Default for SvgOptions<'static> {
    fn default() -> Self {
        SvgOptions { theme: "light" }
    }
}

// ---------------------------------------------------------------------------
// Card geometry
// ---------------------------------------------------------------------------

const CARD_W: u32 = 1100;
const CARD_H: u32 = 460;
const TITLE_Y: u32 = 40;
const DIVIDER_Y: u32 = 60;
const STATS_X: u32 = 45;
const STATS_VALUE_X: u32 = 180;
const LANG_LABEL_X: u32 = 780;
const LANG_BAR_X: u32 = 880;
const LANG_PCT_X: u32 = 1000;
const LANG_TOP_Y: u32 = 120;
const LANG_ROW_GAP: u32 = 25;
const LANG_BAR_H: u32 = 10;
const GAUGE_CX: u32 = 550;
const GAUGE_R: u32 = 60;
const STREAK_GAUGE_CY: u32 = 160;
const RANK_GAUGE_CY: u32 = 325;
const AURA_R: u32 = 16;

// ---------------------------------------------------------------------------
// Public render entry point
// ---------------------------------------------------------------------------

/// Render the SVG card and return it as a UTF-8 string.
pub fn render(s: &Summary, opts: &SvgOptions<'_>) -> Result<String> {
    let theme = theme_by_name(opts.theme)?;

    let css = css_block(theme, s);
    let name = escape_xml(&s.display_name);
    let stats = stat_elements(s);
    let languages = language_elements(&s.languages);
    let streak_gauge = streak_gauge(s);
    let rank_gauge = rank_gauge(s);

    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_W}" height="{CARD_H}" viewBox="0 0 {CARD_W} {CARD_H}" role="img" aria-label="GitHub summary for {name}">
<title>{name} · GitHub Summary</title>
<style>
{css}</style>
<rect x="1" y="1" width="{w}" height="{h}" rx="16" ry="16" fill="var(--bg)" stroke="var(--border)" stroke-width="2"/>
<text x="{cx}" y="{TITLE_Y}" font-size="20" text-anchor="middle" font-weight="bold" fill="var(--title)">{name} – GitHub Summary</text>
<line x1="10" y1="{DIVIDER_Y}" x2="{x2}" y2="{DIVIDER_Y}" stroke="var(--border)" stroke-width="1"/>
{stats}<g font-weight="bold" font-size="15" fill="var(--heading)">
<text x="{LANG_LABEL_X}" y="90">Top Languages</text>
{languages}</g>
{streak_gauge}{rank_gauge}</svg>"#,
        w = CARD_W - 2,
        h = CARD_H - 2,
        cx = CARD_W / 2,
        x2 = CARD_W - 10,
    );

    Ok(svg)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Build the `<style>` block: palette variables plus the gauge animations,
/// whose colours and end offsets depend on the summary.
fn css_block(theme: &Theme, s: &Summary) -> String {
    let mut css = String::new();

    match theme {
        Theme::Auto { light, dark } => {
            css.push_str(&palette_vars(light));
            css.push_str("@media (prefers-color-scheme: dark) {\n  :root {\n");
            for line in palette_vars_inner(dark) {
                css.push_str("    ");
                css.push_str(&line);
                css.push('\n');
            }
            css.push_str("  }\n}\n");
        }
        Theme::Fixed(p) => css.push_str(&palette_vars(p)),
    }

    let streak_offset = dash_offset(s.streak_visual.arc_fill, GAUGE_DASHARRAY);
    let rank_offset = dash_offset(s.score.arc_fill, GAUGE_DASHARRAY);

    css.push_str(&gauge_css(
        "streak",
        s.streak_visual.tier.background_color(),
        streak_offset,
    ));
    css.push_str(&gauge_css("rank", s.score.rank.background_color(), rank_offset));
    css.push_str(
        ".gauge-value { font: 800 24px 'Segoe UI', Ubuntu, Sans-Serif; fill: var(--title); \
         animation: scaleIn 0.3s ease-in-out forwards; }\n\
         @keyframes scaleIn { from { opacity: 0; } to { opacity: 1; } }\n",
    );

    css
}

/// CSS for one circular gauge: the faint rim, the animated arc and its
/// keyframes ending at `offset`.
fn gauge_css(name: &str, rim_color: &str, offset: f64) -> String {
    format!(
        ".{name}-rim {{ stroke: {rim_color}; fill: none; stroke-width: 12; opacity: 0.2; }}\n\
         .{name}-arc {{ stroke-dasharray: {GAUGE_DASHARRAY}; stroke-dashoffset: {GAUGE_DASHARRAY}; fill: none; \
         stroke-width: 8; stroke-linecap: round; opacity: 0.8; \
         animation: {name}Fill 1s forwards ease-in-out; }}\n\
         @keyframes {name}Fill {{ from {{ stroke-dashoffset: {GAUGE_DASHARRAY}; }} to {{ stroke-dashoffset: {offset}; }} }}\n"
    )
}

fn palette_vars(p: &Palette) -> String {
    let mut s = String::from(":root {\n");
    for line in palette_vars_inner(p) {
        s.push_str("  ");
        s.push_str(&line);
        s.push('\n');
    }
    s.push_str("}\n");
    s
}

fn palette_vars_inner(p: &Palette) -> Vec<String> {
    vec![
        format!("--bg:{};", p.bg),
        format!("--border:{};", p.border),
        format!("--title:{};", p.title),
        format!("--heading:{};", p.heading),
        format!("--label:{};", p.label),
        format!("--value:{};", p.value),
    ]
}

/// Left-hand column: contribution totals and profile counters.
fn stat_elements(s: &Summary) -> String {
    let contributions = [
        ("Total:", fmt_count(s.total_contributions)),
        ("Longest Streak:", format!("{} days", s.streak.max_streak)),
    ];
    let stats = [
        ("Stars:", fmt_count(s.stars)),
        ("Commits:", fmt_count(s.commits)),
        ("PRs:", fmt_count(s.pull_requests)),
        ("Issues:", fmt_count(s.issues)),
        ("Contributed to:", fmt_count(s.contributed_to)),
    ];

    let mut out = String::from(r#"<g font-size="15" font-weight="bold" fill="var(--heading)">"#);
    out.push('\n');
    out.push_str(&format!(r#"<text x="{STATS_X}" y="90">Contributions</text>"#));
    out.push('\n');
    for (i, (label, value)) in contributions.iter().enumerate() {
        out.push_str(&stat_row(140 + i as u32 * 30, label, value));
    }
    out.push_str(&format!(
        r#"<line x1="40" y1="190" x2="400" y2="190" stroke="var(--border)" stroke-width="1"/>
<text x="{STATS_X}" y="210">Stats</text>"#
    ));
    out.push('\n');
    for (i, (label, value)) in stats.iter().enumerate() {
        out.push_str(&stat_row(240 + i as u32 * 30, label, value));
    }
    out.push_str("</g>\n");
    out
}

fn stat_row(y: u32, label: &str, value: &str) -> String {
    format!(
        r#"<text x="{STATS_X}" y="{y}" fill="var(--label)">{label}</text>
<text x="{STATS_VALUE_X}" y="{y}" fill="var(--value)">{value}</text>
"#
    )
}

/// One label / animated bar / percentage triple per language.
fn language_elements(languages: &[LanguageShare]) -> String {
    let mut out = String::new();

    for (i, share) in languages.iter().enumerate() {
        let y = LANG_TOP_Y + i as u32 * LANG_ROW_GAP;
        let color = language_color(&share.language);
        let lang = escape_xml(&share.language);
        // The bar track is 100 px wide, so the width is the rounded percentage.
        let width = share.percentage.round() as u32;
        let pct = fmt_pct(share.percentage);

        out.push_str(&format!(
            r#"<text x="{LANG_LABEL_X}" y="{y}" fill="{color}">{lang}</text>
<rect x="{LANG_BAR_X}" y="{bar_y}" width="0" height="{LANG_BAR_H}" fill="{color}">
  <animate attributeName="width" from="0" to="{width}" dur="1s" fill="freeze" />
</rect>
<text x="{LANG_PCT_X}" y="{pct_y}" fill="var(--value)">{pct}%</text>
"#,
            bar_y = y - LANG_BAR_H,
            pct_y = y - 1,
        ));
    }

    out
}

/// Longest-streak gauge with its date range.
fn streak_gauge(s: &Summary) -> String {
    let cy = STREAK_GAUGE_CY;
    let color = s.streak_visual.tier.color();
    let days = s.streak.max_streak;
    let start = fmt_opt_date(s.streak.longest_start);
    let end = fmt_opt_date(s.streak.longest_end);

    format!(
        r#"<g class="streak">
<circle class="streak-rim" cx="{GAUGE_CX}" cy="{cy}" r="{GAUGE_R}"/>
<circle class="streak-arc" cx="{GAUGE_CX}" cy="{cy}" r="{GAUGE_R}" stroke="{color}" transform="rotate(-90 {GAUGE_CX} {cy})"/>
<text x="{GAUGE_CX}" y="{icon_y}" font-size="22" text-anchor="middle">🔥</text>
<text x="{GAUGE_CX}" y="{value_y}" class="gauge-value" text-anchor="middle">{days}</text>
<text x="{GAUGE_CX}" y="{caption_y}" fill="var(--heading)" text-anchor="middle" font-size="15" font-weight="bold">Days streak</text>
<text x="{GAUGE_CX}" y="{start_y}" fill="var(--value)" text-anchor="middle" font-size="13">{start}</text>
<text x="{GAUGE_CX}" y="{end_y}" fill="var(--value)" text-anchor="middle" font-size="13">{end}</text>
</g>
"#,
        icon_y = cy - 70,
        value_y = cy - 15,
        caption_y = cy + 2,
        start_y = cy + 22,
        end_y = cy + 40,
    )
}

/// Overall rank gauge.
fn rank_gauge(s: &Summary) -> String {
    let cy = RANK_GAUGE_CY;
    let rank = s.score.rank;
    let color = rank.color();
    let icon = rank.icon();
    let label = escape_xml(rank.label());
    let glow = rank.background_color();
    let aura = s.score.aura_scale();

    format!(
        r#"<g class="rank">
<circle class="rank-rim" cx="{GAUGE_CX}" cy="{cy}" r="{GAUGE_R}"/>
<circle class="rank-arc" cx="{GAUGE_CX}" cy="{cy}" r="{GAUGE_R}" stroke="{color}" transform="rotate(-90 {GAUGE_CX} {cy})"/>
<circle class="rank-aura" cx="0" cy="0" r="{AURA_R}" fill="{glow}" opacity="0.35" transform="translate({GAUGE_CX} {aura_y}) scale({aura})"/>
<text x="{GAUGE_CX}" y="{icon_y}" font-size="22" text-anchor="middle">{icon}</text>
<text x="{GAUGE_CX}" y="{value_y}" class="gauge-value" text-anchor="middle">{label}</text>
<text x="{GAUGE_CX}" y="{caption_y}" fill="var(--heading)" text-anchor="middle" font-size="15" font-weight="bold">Overall Rank</text>
</g>
"#,
        icon_y = cy - 70,
        aura_y = cy - 77,
        value_y = cy - 5,
        caption_y = cy + 20,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

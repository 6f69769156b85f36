//! Shared rendering utilities used by all output backends.

pub mod markdown;
pub mod svg;
pub mod text;

use chrono::NaiveDate;

use crate::summary::fmt_date;

/// Length of the stroke dash used by both circular gauges.  The gauge CSS
/// animates `stroke-dashoffset` from this value down to [`dash_offset`].
pub const GAUGE_DASHARRAY: f64 = 360.0;

/// Placeholder shown where a date is absent (no streak yet).
pub const NO_DATE: &str = "–";

// ---------------------------------------------------------------------------
// Gauge arithmetic
// ---------------------------------------------------------------------------

/// Stroke offset that leaves `fill` of a `dasharray`-long arc visible,
/// rounded to two decimals.
pub fn dash_offset(fill: f64, dasharray: f64) -> f64 {
    let fill = fill.clamp(0.0, 1.0);
    (dasharray * (1.0 - fill) * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Number & date formatting
// ---------------------------------------------------------------------------

/// Format an integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `DD/MM/YYYY`, or [`NO_DATE`] when there is no date.
pub fn fmt_opt_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| NO_DATE.to_owned(), fmt_date)
}

/// Format a percentage with exactly one decimal: `66.7`, `50.0`.
pub fn fmt_pct(pct: f64) -> String {
    format!("{pct:.1}")
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape text for use inside XML character data or attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

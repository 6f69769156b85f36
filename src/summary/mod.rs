//! Summary computation over a fetched GitHub user.
//!
//! Everything here is pure: no I/O, no shared state.  [`compute`] derives the
//! aggregate counters from a [`User`] and runs the pipeline; the individual
//! stages live in [`streak`], [`languages`] and [`rank`].

pub mod languages;
pub mod rank;
pub mod streak;

use chrono::{DateTime, NaiveDate};

use crate::error::Error;
use crate::github::{ContributionCalendar, User};

pub use languages::{compute_language_shares, LanguageShare, TOP_LANGUAGES_COUNT};
pub use rank::{
    compute_score_rank, compute_streak_visual, Aggregates, Rank, ScoreRank, StreakTier,
    StreakVisual,
};
pub use streak::{compute_streak, current_streak, StreakResult};

/// Display format for every date on the card.
pub const DISPLAY_DATE_FMT: &str = "%d/%m/%Y";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One calendar day of the contribution graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: u32,
}

impl DayActivity {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// All values a renderer needs, derived from one [`User`].
#[derive(Debug, Clone)]
pub struct Summary {
    /// Login the card was requested for.
    pub login: String,
    /// Profile name, falling back to the login.
    pub display_name: String,
    /// Past-year contribution total from the calendar.
    pub total_contributions: u64,
    pub commits: u64,
    /// Contributions to private repositories (counted, but not itemised).
    pub private_contributions: u64,
    pub contributed_to: u64,
    pub pull_requests: u64,
    pub issues: u64,
    /// Stargazers summed across owned, non-fork repositories.
    pub stars: u64,
    pub streak: StreakResult,
    /// Run of active days ending today (or yesterday).
    pub current_streak: u32,
    pub languages: Vec<LanguageShare>,
    pub score: ScoreRank,
    pub streak_visual: StreakVisual,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Compute the [`Summary`] for `login` from its fetched [`User`] data.
pub fn compute(login: &str, user: &User) -> Summary {
    let cc = &user.contributions_collection;
    let calendar = &cc.contribution_calendar;

    let days = normalize_days(calendar);
    let streak = compute_streak(&days);
    let current = current_streak(&days);

    let repos = &user.repositories.nodes;
    let stars = repos.iter().map(|r| r.stargazer_count).sum();
    let languages = compute_language_shares(repos);

    let score = compute_score_rank(&Aggregates {
        contributions: calendar.total_contributions,
        stars,
        pull_requests: user.pull_requests.total_count,
        issues: user.issues.total_count,
        max_streak: streak.max_streak,
    });
    let streak_visual = compute_streak_visual(streak.max_streak);

    let display_name = user
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(login)
        .to_owned();

    Summary {
        login: login.to_owned(),
        display_name,
        total_contributions: calendar.total_contributions,
        commits: cc.total_commit_contributions,
        private_contributions: cc.restricted_contributions_count,
        contributed_to: cc.total_repositories_with_contributed_commits,
        pull_requests: user.pull_requests.total_count,
        issues: user.issues.total_count,
        stars,
        streak,
        current_streak: current,
        languages,
        score,
        streak_visual,
    }
}

/// Flatten the weeks-of-days calendar into one chronological sequence.
///
/// Weeks are concatenated in order and days keep their order within a week;
/// nothing is filtered, deduplicated or re-sorted.
pub fn normalize_days(calendar: &ContributionCalendar) -> Vec<DayActivity> {
    calendar
        .weeks
        .iter()
        .flat_map(|w| w.contribution_days.iter())
        .map(|d| DayActivity::new(d.date, d.contribution_count))
        .collect()
}

// ---------------------------------------------------------------------------
// Date formatting
// ---------------------------------------------------------------------------

/// Render an ISO date as `DD/MM/YYYY`.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, in which case
/// the calendar date as written (in its own offset) is used.
pub fn format_date(iso: &str) -> Result<String, Error> {
    parse_iso_date(iso).map(fmt_date)
}

/// Format an already-parsed date as `DD/MM/YYYY`.
pub fn fmt_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FMT).to_string()
}

fn parse_iso_date(s: &str) -> Result<NaiveDate, Error> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| Error::InvalidDate(s.to_owned()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

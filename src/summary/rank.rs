//! Composite score, rank tiers and the two circular gauges on the card.
//!
//! The rank gauge is bounded by an empirical score ceiling of 20, the streak
//! gauge by a calendar year.  They use unrelated thresholds and are kept as
//! separate mappings.

use std::fmt;

/// Score at which the rank gauge is full.
pub const SCORE_CEILING: f64 = 20.0;

/// Streak length (days) at which the streak gauge is full.
pub const STREAK_CEILING: u32 = 366;

// ---------------------------------------------------------------------------
// Score & rank
// ---------------------------------------------------------------------------

/// Counters the score is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregates {
    pub contributions: u64,
    pub stars: u64,
    pub pull_requests: u64,
    pub issues: u64,
    pub max_streak: u32,
}

/// Rank tiers, ordered lowest to highest so `Ord` follows the tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    D,
    C,
    B,
    A,
    APlus,
    S,
}

/// Tier thresholds in hundredths of a point, highest first.  A score must be
/// strictly greater than the threshold; the first match wins and anything
/// below the last entry is [`Rank::D`].
const RANK_TIERS: &[(u64, Rank)] = &[
    (1800, Rank::S),
    (1500, Rank::APlus),
    (1200, Rank::A),
    (900, Rank::B),
    (500, Rank::C),
];

impl Rank {
    fn from_centi_score(centi: u64) -> Rank {
        RANK_TIERS
            .iter()
            .find(|(threshold, _)| centi > *threshold)
            .map_or(Rank::D, |(_, rank)| *rank)
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::APlus => "A+",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }

    /// Stroke colour of the rank gauge.
    pub fn color(self) -> &'static str {
        match self {
            Rank::S => "#ffd700",
            Rank::APlus => "#00b894",
            Rank::A => "#0984e3",
            Rank::B => "#6c5ce7",
            Rank::C => "#e84393",
            Rank::D => "#636e72",
        }
    }

    /// Colour of the faint rim behind the gauge.
    pub fn background_color(self) -> &'static str {
        match self {
            Rank::S => "#ffea60",
            Rank::APlus => "#66e0c1",
            Rank::A => "#5faeff",
            Rank::B => "#a99df9",
            Rank::C => "#f58dba",
            Rank::D => "#aab0b5",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Rank::S => "👑",
            Rank::APlus => "🍾",
            Rank::A => "💎",
            Rank::B => "👾",
            Rank::C => "🧠",
            Rank::D => "🎰",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weighted score with its rank tier and gauge fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRank {
    pub score: f64,
    pub rank: Rank,
    /// Fraction of the rank gauge to fill, in `[0, 1]`.
    pub arc_fill: f64,
}

impl ScoreRank {
    /// Scale factor for the glow behind the rank letter: 1.0 at score zero,
    /// 1.8 at the ceiling.
    pub fn aura_scale(&self) -> f64 {
        ((1.0 + self.arc_fill * 0.8) * 100.0).round() / 100.0
    }
}

/// Score the aggregates and map the score onto a [`Rank`].
///
/// `score = contributions·0.01 + stars·0.05 + pull_requests·0.3 +
/// issues·0.2 + max_streak·0.2`.  The sum is accumulated in integer
/// hundredths, so tier boundaries compare exactly (a score of exactly 15 is
/// rank `A`, not `A+`).
pub fn compute_score_rank(a: &Aggregates) -> ScoreRank {
    let centi = a
        .contributions
        .saturating_add(a.stars.saturating_mul(5))
        .saturating_add(a.pull_requests.saturating_mul(30))
        .saturating_add(a.issues.saturating_mul(20))
        .saturating_add(u64::from(a.max_streak) * 20);

    let score = centi as f64 / 100.0;
    ScoreRank {
        score,
        rank: Rank::from_centi_score(centi),
        arc_fill: (score / SCORE_CEILING).min(1.0),
    }
}

// ---------------------------------------------------------------------------
// Streak gauge
// ---------------------------------------------------------------------------

/// Streak bands, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StreakTier {
    /// No active day at all.
    None,
    /// 1–4 days.
    Started,
    /// 5–6 days.
    Warming,
    /// 7–30 days.
    Weekly,
    /// 31–179 days.
    Monthly,
    /// 180–269 days.
    HalfYear,
    /// 270–364 days.
    Blazing,
    /// Exactly 365 days.
    FullYear,
    /// More than 365 days.
    BeyondYear,
}

impl StreakTier {
    pub fn for_streak(days: u32) -> StreakTier {
        match days {
            366.. => StreakTier::BeyondYear,
            365 => StreakTier::FullYear,
            270.. => StreakTier::Blazing,
            180.. => StreakTier::HalfYear,
            31.. => StreakTier::Monthly,
            7.. => StreakTier::Weekly,
            5.. => StreakTier::Warming,
            1.. => StreakTier::Started,
            0 => StreakTier::None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StreakTier::BeyondYear => "#ffd700",
            StreakTier::FullYear => "#ffcc00",
            StreakTier::Blazing => "#e67e22",
            StreakTier::HalfYear => "#d63031",
            StreakTier::Monthly => "#6c5ce7",
            StreakTier::Weekly => "#0984e3",
            StreakTier::Warming => "#55efc4",
            StreakTier::Started => "#b2bec3",
            StreakTier::None => "#cccccc",
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            StreakTier::BeyondYear => "#ffea60",
            StreakTier::FullYear => "#ffe066",
            StreakTier::Blazing => "#f5a25d",
            StreakTier::HalfYear => "#ed6b6c",
            StreakTier::Monthly => "#a99df9",
            StreakTier::Weekly => "#5faeff",
            StreakTier::Warming => "#9cffe3",
            StreakTier::Started => "#d9dee1",
            StreakTier::None => "#e8e8e8",
        }
    }
}

/// Streak gauge parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreakVisual {
    pub tier: StreakTier,
    /// Fraction of the streak gauge to fill, in `[0, 1]`.
    pub arc_fill: f64,
}

/// Map a longest-streak length onto its gauge tier and fill.
pub fn compute_streak_visual(max_streak: u32) -> StreakVisual {
    StreakVisual {
        tier: StreakTier::for_streak(max_streak),
        arc_fill: (f64::from(max_streak) / f64::from(STREAK_CEILING)).min(1.0),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

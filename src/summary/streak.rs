//! Consecutive-day activity streaks.

use chrono::NaiveDate;

use super::DayActivity;

/// Longest run of consecutive active days.
///
/// `longest_start` and `longest_end` are `None` exactly when `max_streak` is
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakResult {
    pub max_streak: u32,
    pub longest_start: Option<NaiveDate>,
    pub longest_end: Option<NaiveDate>,
}

/// Find the longest run of consecutive calendar days with a non-zero count.
///
/// `days` must be sorted ascending by date; unsorted input gives an
/// unspecified (but panic-free) result.  A positive day extends the current
/// run only when the previous entry was also positive *and* exactly one
/// calendar day earlier, so gaps in the series break a run just like a zero
/// day does.  On ties the earliest run wins.
pub fn compute_streak(days: &[DayActivity]) -> StreakResult {
    let mut best = StreakResult::default();
    let mut run = 0u32;
    let mut run_start: Option<NaiveDate> = None;
    let mut prev: Option<NaiveDate> = None;

    for day in days {
        if day.count == 0 {
            run = 0;
            prev = Some(day.date);
            continue;
        }

        let continues = run > 0 && prev.is_some_and(|p| (day.date - p).num_days() == 1);
        if continues {
            run += 1;
        } else {
            run = 1;
            run_start = Some(day.date);
        }
        prev = Some(day.date);

        if run > best.max_streak {
            best = StreakResult {
                max_streak: run,
                longest_start: run_start,
                longest_end: Some(day.date),
            };
        }
    }

    best
}

/// Length of the active run ending at the most recent day.
///
/// A zero count on the final day does not break the streak: the day may
/// simply not be over yet, so the run ending the day before is reported.
pub fn current_streak(days: &[DayActivity]) -> u32 {
    let tail = match days.split_last() {
        Some((last, rest)) if last.count == 0 => rest,
        _ => days,
    };

    let mut run = 0u32;
    let mut next: Option<NaiveDate> = None;
    for day in tail.iter().rev() {
        let adjacent = next.map_or(true, |n| (n - day.date).num_days() == 1);
        if day.count == 0 || !adjacent {
            break;
        }
        run += 1;
        next = Some(day.date);
    }
    run
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn day(date: &str, count: u32) -> DayActivity {
        DayActivity::new(d(date), count)
    }

    /// `counts.len()` consecutive days starting at `start`.
    fn series(start: &str, counts: &[u32]) -> Vec<DayActivity> {
        let start = d(start);
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| DayActivity::new(start + Duration::days(i as i64), c))
            .collect()
    }

    // -----------------------------------------------------------------------
    // compute_streak
    // -----------------------------------------------------------------------

    #[test]
    fn empty_input_has_no_streak() {
        let s = compute_streak(&[]);
        assert_eq!(s.max_streak, 0);
        assert_eq!(s.longest_start, None);
        assert_eq!(s.longest_end, None);
    }

    #[test]
    fn all_zero_has_no_streak() {
        let s = compute_streak(&series("2024-01-01", &[0; 30]));
        assert_eq!(s, StreakResult::default());
    }

    #[test]
    fn single_positive_day() {
        let s = compute_streak(&[day("2024-02-29", 5)]);
        assert_eq!(s.max_streak, 1);
        assert_eq!(s.longest_start, Some(d("2024-02-29")));
        assert_eq!(s.longest_end, Some(d("2024-02-29")));
    }

    #[test]
    fn zero_day_splits_run() {
        let days = vec![
            day("2024-01-01", 1),
            day("2024-01-02", 1),
            day("2024-01-03", 0),
            day("2024-01-04", 1),
        ];
        let s = compute_streak(&days);
        assert_eq!(s.max_streak, 2);
        assert_eq!(s.longest_start, Some(d("2024-01-01")));
        assert_eq!(s.longest_end, Some(d("2024-01-02")));
    }

    #[test]
    fn consecutive_positive_days_form_one_run() {
        for n in 1..=40usize {
            let s = compute_streak(&series("2023-12-20", &vec![1; n]));
            assert_eq!(s.max_streak, n as u32);
            assert_eq!(s.longest_start, Some(d("2023-12-20")));
            assert_eq!(
                s.longest_end,
                Some(d("2023-12-20") + Duration::days(n as i64 - 1))
            );
        }
    }

    #[test]
    fn run_crosses_month_and_year_boundaries() {
        let s = compute_streak(&series("2023-12-30", &[1, 2, 3, 4]));
        assert_eq!(s.max_streak, 4);
        assert_eq!(s.longest_end, Some(d("2024-01-02")));
    }

    #[test]
    fn date_gap_breaks_run_without_zero_day() {
        let days = vec![
            day("2024-01-01", 1),
            day("2024-01-02", 1),
            // 2024-01-03 missing from the series
            day("2024-01-04", 1),
            day("2024-01-05", 1),
            day("2024-01-06", 1),
        ];
        let s = compute_streak(&days);
        assert_eq!(s.max_streak, 3);
        assert_eq!(s.longest_start, Some(d("2024-01-04")));
        assert_eq!(s.longest_end, Some(d("2024-01-06")));
    }

    #[test]
    fn scattered_days_each_start_a_fresh_run() {
        let days = vec![day("2024-01-01", 3), day("2024-01-05", 2), day("2024-01-09", 7)];
        let s = compute_streak(&days);
        assert_eq!(s.max_streak, 1);
        assert_eq!(s.longest_start, Some(d("2024-01-01")));
        assert_eq!(s.longest_end, Some(d("2024-01-01")));
    }

    #[test]
    fn earliest_of_equal_runs_wins() {
        let s = compute_streak(&series("2024-03-01", &[1, 1, 0, 1, 1]));
        assert_eq!(s.max_streak, 2);
        assert_eq!(s.longest_start, Some(d("2024-03-01")));
    }

    #[test]
    fn later_longer_run_replaces_earlier() {
        let s = compute_streak(&series("2024-03-01", &[1, 1, 0, 1, 1, 1, 0]));
        assert_eq!(s.max_streak, 3);
        assert_eq!(s.longest_start, Some(d("2024-03-04")));
        assert_eq!(s.longest_end, Some(d("2024-03-06")));
    }

    #[test]
    fn single_zero_in_the_middle_shortens_both_halves() {
        let n = 21;
        for hole in 1..n - 1 {
            let mut counts = vec![1u32; n];
            counts[hole] = 0;
            let s = compute_streak(&series("2024-05-01", &counts));
            assert!(s.max_streak < n as u32, "hole at {hole} did not split the run");
            assert_eq!(s.max_streak as usize, hole.max(n - hole - 1));
        }
    }

    #[test]
    fn reported_range_is_a_maximal_positive_run() {
        let counts = [0, 2, 0, 1, 1, 4, 0, 0, 3, 3, 0, 1];
        let days = series("2024-06-01", &counts);
        let s = compute_streak(&days);
        assert!(s.max_streak as usize <= days.len());

        let start = s.longest_start.unwrap();
        let end = s.longest_end.unwrap();
        assert_eq!((end - start).num_days() + 1, s.max_streak as i64);

        let inside: Vec<&DayActivity> = days
            .iter()
            .filter(|x| x.date >= start && x.date <= end)
            .collect();
        assert_eq!(inside.len(), s.max_streak as usize);
        assert!(inside.iter().all(|x| x.count > 0));

        let before = days.iter().find(|x| x.date == start - Duration::days(1));
        let after = days.iter().find(|x| x.date == end + Duration::days(1));
        assert!(before.map_or(true, |x| x.count == 0));
        assert!(after.map_or(true, |x| x.count == 0));
    }

    // -----------------------------------------------------------------------
    // current_streak
    // -----------------------------------------------------------------------

    #[test]
    fn current_streak_counts_trailing_run() {
        assert_eq!(current_streak(&series("2024-01-01", &[1, 0, 1, 1, 1])), 3);
    }

    #[test]
    fn current_streak_tolerates_idle_today() {
        assert_eq!(current_streak(&series("2024-01-01", &[1, 1, 0])), 2);
    }

    #[test]
    fn current_streak_zero_after_two_idle_days() {
        assert_eq!(current_streak(&series("2024-01-01", &[1, 1, 0, 0])), 0);
    }

    #[test]
    fn current_streak_stops_at_date_gap() {
        let days = vec![day("2024-01-01", 1), day("2024-01-03", 1), day("2024-01-04", 1)];
        assert_eq!(current_streak(&days), 2);
    }

    #[test]
    fn current_streak_empty() {
        assert_eq!(current_streak(&[]), 0);
        assert_eq!(current_streak(&[day("2024-01-01", 0)]), 0);
    }
}

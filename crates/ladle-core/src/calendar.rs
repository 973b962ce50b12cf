//! Calendar view-state and day aggregation.
//!
//! The calendar shows a member's consumed-recipe entries for a visible
//! month (or the 7-day week around a selected day in the calendar modal).
//! Entries are fetched per window with no cross-window cache: every
//! navigation recomputes the window and re-queries the server.
//!
//! Day matching normalizes both sides to a calendar day before comparing.
//! The server stores instants; comparing raw timestamps would under-count
//! entries whose time component drifts across a local day boundary.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::models::{CalendarEntry, CalendarQuery, RecipeCategory};

/// Normalize a stored entry date to a calendar day.
///
/// Accepts a bare date, an RFC 3339 instant, or a naive date-time; falls
/// back to the `YYYY-MM-DD` prefix for anything else the server sends.
#[must_use]
pub fn entry_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.date());
    }
    raw.get(0..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Count entries per calendar day.
#[must_use]
pub fn day_counts(entries: &[CalendarEntry]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        if let Some(day) = entry_day(&entry.date) {
            *counts.entry(day).or_insert(0) += 1;
        }
    }
    counts
}

/// One visible month of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
}

impl MonthWindow {
    /// Window containing the given day.
    #[must_use]
    pub fn containing(day: NaiveDate) -> Self {
        Self {
            year: day.year(),
            month: day.month(),
        }
    }

    /// Window for the local current month.
    #[must_use]
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// First day of the month.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Last day of the month.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first| first.pred_opt())
            .unwrap_or_else(|| self.start())
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    #[must_use]
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Cells of a Sunday-first month grid: leading `None` padding for the
    /// first week, then one `Some(day)` per day of the month.
    #[must_use]
    pub fn grid_days(&self) -> Vec<Option<NaiveDate>> {
        let start = self.start();
        let leading = start.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        let mut day = start;
        while day <= self.end() {
            cells.push(Some(day));
            if let Some(next) = day.succ_opt() {
                day = next;
            } else {
                break;
            }
        }
        cells
    }
}

/// The 7-day Sunday-based week around a selected day. Used by the calendar
/// modal, which fetches its own range independently of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    #[must_use]
    pub fn surrounding(day: NaiveDate) -> Self {
        let back = i64::from(day.weekday().num_days_from_sunday());
        let start = day - chrono::Duration::days(back);
        Self {
            start,
            end: start + chrono::Duration::days(6),
        }
    }

    /// All seven days of the window, in order.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..7)
            .map(|offset| self.start + chrono::Duration::days(offset))
            .collect()
    }
}

/// Month-view state: the visible window plus the entries last fetched for
/// it. Overlapping fetches are neither sequenced nor cancelled, so the
/// last response to resolve wins the render; that race is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub window: MonthWindow,
    pub entries: Vec<CalendarEntry>,
}

impl CalendarView {
    #[must_use]
    pub fn new(window: MonthWindow) -> Self {
        Self {
            window,
            entries: Vec::new(),
        }
    }

    /// Range query for the current window.
    #[must_use]
    pub fn query(&self, member_id: i64, recipe: Option<RecipeCategory>) -> CalendarQuery {
        CalendarQuery {
            member_id,
            start: self.window.start(),
            end: self.window.end(),
            recipe,
        }
    }

    /// Replace the entry list with a fetch response, whichever window it
    /// was issued for.
    pub fn apply_fetch(&mut self, entries: Vec<CalendarEntry>) {
        self.entries = entries;
    }

    /// Navigate one month back; the stale list stays visible until the
    /// caller's re-fetch resolves.
    pub fn go_prev(&mut self) {
        self.window = self.window.prev();
    }

    pub fn go_next(&mut self) {
        self.window = self.window.next();
    }

    /// Entries whose normalized day equals the given day.
    #[must_use]
    pub fn count_on(&self, day: NaiveDate) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry_day(&entry.date) == Some(day))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::CalendarId;

    use super::*;

    fn entry(id: CalendarId, date: &str) -> CalendarEntry {
        CalendarEntry {
            calendar_id: id,
            member_id: 7,
            recipe_id: format!("recipe-{id}"),
            recipe_name: "Negroni".to_string(),
            category: RecipeCategory::Cocktail,
            date: date.to_string(),
            amount: "1 glass".to_string(),
            memo: String::new(),
        }
    }

    #[test]
    fn entry_day_accepts_bare_dates_and_instants() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(entry_day("2024-05-01"), Some(day));
        assert_eq!(entry_day("2024-05-01T23:59:00"), Some(day));
        assert_eq!(entry_day("2024-05-01T00:01:00+09:00"), Some(day));
        assert_eq!(entry_day("not a date"), None);
    }

    #[test]
    fn day_boundary_times_stay_on_their_calendar_day() {
        let entries = vec![
            entry(1, "2024-05-01T23:59:00"),
            entry(2, "2024-05-02T00:01:00"),
            entry(3, "2024-05-02"),
        ];
        let counts = day_counts(&entries);
        assert_eq!(
            counts.get(&NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            Some(&1)
        );
        assert_eq!(
            counts.get(&NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()),
            Some(&2)
        );
    }

    #[test]
    fn month_window_bounds_handle_year_wrap() {
        let january = MonthWindow {
            year: 2024,
            month: 1,
        };
        assert_eq!(
            january.prev(),
            MonthWindow {
                year: 2023,
                month: 12
            }
        );
        let december = MonthWindow {
            year: 2024,
            month: 12,
        };
        assert_eq!(
            december.end(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert_eq!(
            december.next(),
            MonthWindow {
                year: 2025,
                month: 1
            }
        );
    }

    #[test]
    fn grid_days_pads_to_the_first_weekday() {
        // 2024-05-01 is a Wednesday: three leading blanks in a Sunday-first grid.
        let window = MonthWindow {
            year: 2024,
            month: 5,
        };
        let cells = window.grid_days();
        assert_eq!(cells.iter().take_while(|cell| cell.is_none()).count(), 3);
        assert_eq!(cells.iter().flatten().count(), 31);
    }

    #[test]
    fn week_window_is_sunday_based() {
        // 2024-05-01 is a Wednesday.
        let window = WeekWindow::surrounding(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 4, 28).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
        assert_eq!(window.days().len(), 7);
    }

    #[test]
    fn overlapping_fetches_resolve_last_write_wins() {
        // Rapid navigation issues a fetch per window; responses may return
        // out of issuance order and the last to resolve wins the render.
        let mut view = CalendarView::new(MonthWindow {
            year: 2024,
            month: 5,
        });
        view.go_next();

        // June response resolves first, stale May response resolves last.
        view.apply_fetch(vec![entry(10, "2024-06-03")]);
        view.apply_fetch(vec![entry(1, "2024-05-01")]);

        assert_eq!(
            view.count_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            1
        );
        assert_eq!(
            view.count_on(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()),
            0
        );
    }

    #[test]
    fn query_spans_the_visible_window() {
        let view = CalendarView::new(MonthWindow {
            year: 2024,
            month: 2,
        });
        let query = view.query(7, None);
        assert_eq!(query.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        // 2024 is a leap year.
        assert_eq!(query.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(query.member_id, 7);
    }
}

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::errors::AppError;
use crate::models::CalendarCell;

pub const GRID_CELLS: usize = 42;

pub const CLOSED_DAY: Weekday = Weekday::Sun;

pub fn is_closed(date: NaiveDate) -> bool {
    date.weekday() == CLOSED_DAY
}

/// Six weeks starting on the Sunday on or before the 1st of `month` (1-based).
pub fn month_grid(year: i32, month: u32, today: NaiveDate) -> Result<Vec<CalendarCell>, AppError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation(format!("invalid month: {year}-{month}")))?;

    let offset = first.weekday().num_days_from_sunday() as u64;
    let start = first
        .checked_sub_days(Days::new(offset))
        .ok_or_else(|| AppError::Validation(format!("month out of range: {year}-{month}")))?;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for i in 0..GRID_CELLS as u64 {
        let date = start
            .checked_add_days(Days::new(i))
            .ok_or_else(|| AppError::Validation(format!("month out of range: {year}-{month}")))?;
        cells.push(CalendarCell {
            date,
            is_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            is_past: date < today,
            is_closed: is_closed(date),
        });
    }

    Ok(cells)
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_every_month_has_42_cells_starting_sunday() {
        let today = d(2025, 6, 16);
        for year in [2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let grid = month_grid(year, month, today).unwrap();
                assert_eq!(grid.len(), GRID_CELLS);
                assert_eq!(grid[0].date.weekday(), Weekday::Sun, "{year}-{month}");
                assert!(grid[0].date <= d(year, month, 1));
                assert!(grid.iter().any(|c| c.date == d(year, month, 1)));
            }
        }
    }

    #[test]
    fn test_grid_at_end_of_calendar_range() {
        let max = NaiveDate::MAX;
        for month in 1..=12 {
            let first = d(max.year(), month, 1);
            let start = first - Days::new(first.weekday().num_days_from_sunday() as u64);
            let fits = start.checked_add_days(Days::new(GRID_CELLS as u64 - 1)).is_some();
            let grid = month_grid(max.year(), month, max);
            assert_eq!(grid.is_ok(), fits, "month {month}");
            if let Ok(cells) = grid {
                assert_eq!(cells.last().map(|c| c.date), start.checked_add_days(Days::new(41)));
            }
        }
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // June 2025 starts on a Sunday
        let grid = month_grid(2025, 6, d(2025, 6, 16)).unwrap();
        assert_eq!(grid[0].date, d(2025, 6, 1));
        assert!(grid[0].is_current_month);
        assert!(grid[0].is_closed);
    }

    #[test]
    fn test_leap_february() {
        let grid = month_grid(2024, 2, d(2024, 1, 1)).unwrap();
        let in_month = grid.iter().filter(|c| c.is_current_month).count();
        assert_eq!(in_month, 29);
        // Feb 1 2024 was a Thursday, so the grid opens on Jan 28
        assert_eq!(grid[0].date, d(2024, 1, 28));
        assert!(!grid[0].is_current_month);
    }

    #[test]
    fn test_today_and_past_flags() {
        let today = d(2025, 6, 16);
        let grid = month_grid(2025, 6, today).unwrap();

        let todays: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, today);
        assert!(!todays[0].is_past);

        assert!(grid.iter().filter(|c| c.date < today).all(|c| c.is_past));
        assert!(grid.iter().filter(|c| c.date >= today).all(|c| !c.is_past));
    }

    #[test]
    fn test_december_rolls_into_january() {
        let grid = month_grid(2025, 12, d(2025, 6, 16)).unwrap();
        let last = grid.last().unwrap();
        assert_eq!(last.date.year(), 2026);
        assert!(!last.is_current_month);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(month_grid(2025, 0, d(2025, 6, 16)).is_err());
        assert!(month_grid(2025, 13, d(2025, 6, 16)).is_err());
    }

    #[test]
    fn test_month_navigation() {
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2025, 6), (2025, 7));
        assert_eq!(previous_month(2025, 1), (2024, 12));
        assert_eq!(previous_month(2025, 6), (2025, 5));
    }
}

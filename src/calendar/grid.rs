use thiserror::Error;
use time::{Date, Month, Weekday};

pub(super) const DAYS_IN_WEEK: usize = 7;

pub(super) trait WeekdayExt {
    /// Zero-based column of the weekday in a grid whose first column is
    /// `week_start`
    fn column(&self, week_start: Weekday) -> u16;
}

impl WeekdayExt for Weekday {
    fn column(&self, week_start: Weekday) -> u16 {
        let this = u16::from(self.number_days_from_sunday());
        let start = u16::from(week_start.number_days_from_sunday());
        (this + 7 - start) % 7
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cell {
    Blank,
    Day(Date),
}

/// The cells of one calendar month: leading blanks aligning day 1 under its
/// weekday column, then one cell per day of the month in ascending order.  No
/// trailing blanks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    cells: Vec<Cell>,
}

impl MonthGrid {
    pub(crate) fn new(reference: Date, week_start: Weekday) -> MonthGrid {
        let Ok(first) = reference.replace_day(1) else {
            // Unreachable for valid dates; an empty grid beats a panic.
            return MonthGrid { cells: Vec::new() };
        };
        let blanks = usize::from(first.weekday().column(week_start));
        let length = first.month().length(first.year());
        let mut cells = Vec::with_capacity(blanks + usize::from(length));
        cells.resize(blanks, Cell::Blank);
        for day in 1..=length {
            if let Ok(date) = first.replace_day(day) {
                cells.push(Cell::Day(date));
            }
        }
        MonthGrid { cells }
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn weeks(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(DAYS_IN_WEEK)
    }
}

/// Moves `date` by `delta` whole months, clamping the day of month when the
/// target month is shorter.
pub(crate) fn shift_month(date: Date, delta: i32) -> Result<Date, OutOfTimeError> {
    let months0 = i32::from(u8::from(date.month())) - 1 + delta;
    let year = date
        .year()
        .checked_add(months0.div_euclid(12))
        .ok_or(OutOfTimeError)?;
    let month = u8::try_from(months0.rem_euclid(12) + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(OutOfTimeError)?;
    let day = date.day().min(month.length(year));
    Date::from_calendar_date(year, month, day).map_err(|_| OutOfTimeError)
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of the calendar")]
pub(crate) struct OutOfTimeError;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday::{Monday, Sunday};

    fn day_numbers(grid: &MonthGrid) -> Vec<Option<u8>> {
        grid.cells()
            .iter()
            .map(|&cell| match cell {
                Cell::Blank => None,
                Cell::Day(d) => Some(d.day()),
            })
            .collect()
    }

    #[test]
    fn march_2024_sunday_start() {
        // March 1, 2024 is a Friday
        let grid = MonthGrid::new(date!(2024 - 03 - 10), Sunday);
        let days = day_numbers(&grid);
        assert_eq!(days.len(), 36);
        assert_eq!(days[..5], [None, None, None, None, None]);
        assert_eq!(days[5], Some(1));
        assert_eq!(days[35], Some(31));
        assert_eq!(grid.cells()[5], Cell::Day(date!(2024 - 03 - 01)));
        assert_eq!(grid.cells()[35], Cell::Day(date!(2024 - 03 - 31)));
    }

    #[test]
    fn march_2024_monday_start() {
        let grid = MonthGrid::new(date!(2024 - 03 - 10), Monday);
        let days = day_numbers(&grid);
        assert_eq!(days.len(), 35);
        assert_eq!(days[..4], [None, None, None, None]);
        assert_eq!(days[4], Some(1));
    }

    #[test]
    fn month_starting_on_week_start_has_no_blanks() {
        // September 1, 2024 is a Sunday
        let grid = MonthGrid::new(date!(2024 - 09 - 15), Sunday);
        let days = day_numbers(&grid);
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], Some(1));
    }

    #[test]
    fn leap_february() {
        let grid = MonthGrid::new(date!(2024 - 02 - 01), Sunday);
        assert_eq!(grid.cells().len(), 4 + 29);
    }

    #[test]
    fn common_february() {
        let grid = MonthGrid::new(date!(2023 - 02 - 28), Sunday);
        assert_eq!(grid.cells().len(), 3 + 28);
    }

    #[test]
    fn cell_count_law() {
        let mut reference = date!(2020 - 01 - 01);
        for _ in 0..48 {
            let grid = MonthGrid::new(reference, Sunday);
            let blanks = grid
                .cells()
                .iter()
                .take_while(|&&c| c == Cell::Blank)
                .count();
            let days = grid.cells().len() - blanks;
            assert!(blanks <= 6, "{blanks} leading blanks for {reference}");
            assert!((28..=31).contains(&days), "{days} days for {reference}");
            reference = shift_month(reference, 1).unwrap();
        }
    }

    #[test]
    fn shift_forwards() {
        assert_eq!(
            shift_month(date!(2024 - 03 - 10), 1),
            Ok(date!(2024 - 04 - 10))
        );
    }

    #[test]
    fn shift_backwards_across_year() {
        assert_eq!(
            shift_month(date!(2024 - 01 - 15), -1),
            Ok(date!(2023 - 12 - 15))
        );
    }

    #[test]
    fn shift_clamps_short_months() {
        assert_eq!(
            shift_month(date!(2024 - 01 - 31), 1),
            Ok(date!(2024 - 02 - 29))
        );
        assert_eq!(
            shift_month(date!(2023 - 01 - 31), 1),
            Ok(date!(2023 - 02 - 28))
        );
    }

    #[test]
    fn shift_round_trip_stays_in_month() {
        let start = date!(2024 - 03 - 31);
        let there = shift_month(start, 1).unwrap();
        let back = shift_month(there, -1).unwrap();
        assert_eq!((back.year(), back.month()), (start.year(), start.month()));
    }

    #[test]
    fn weekday_columns() {
        assert_eq!(Sunday.column(Sunday), 0);
        assert_eq!(Monday.column(Sunday), 1);
        assert_eq!(Sunday.column(Monday), 6);
        assert_eq!(Monday.column(Monday), 0);
    }
}

use super::grid::{shift_month, OutOfTimeError};
use super::select::Selection;
use time::{Date, Duration, Weekday};

/// The picker's entire persistent state: the cursor (whose year/month
/// component is the visible month), the picked dates, and the configured
/// first day of the week.  Everything else is recomputed per frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PickerState {
    today: Date,
    cursor: Date,
    week_start: Weekday,
    selection: Selection,
}

impl PickerState {
    pub(crate) fn new(today: Date, week_start: Weekday) -> PickerState {
        PickerState {
            today,
            cursor: today,
            week_start,
            selection: Selection::new(),
        }
    }

    pub(crate) fn cursor(mut self, date: Date) -> PickerState {
        self.cursor = date;
        self
    }

    pub(crate) fn cursor_date(&self) -> Date {
        self.cursor
    }

    pub(crate) fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub(crate) fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Moves the cursor by whole days; the visible month follows it.
    pub(crate) fn move_cursor(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        self.cursor = self
            .cursor
            .checked_add(Duration::days(days))
            .ok_or(OutOfTimeError)?;
        Ok(())
    }

    pub(crate) fn shift_month(&mut self, delta: i32) -> Result<(), OutOfTimeError> {
        self.cursor = shift_month(self.cursor, delta)?;
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.cursor = self.today;
    }

    pub(crate) fn jump_to_month(&mut self, date: Date) {
        self.cursor = date;
    }

    /// Toggles the cursor date and returns the resulting selection, sorted
    /// ascending, for change notification.
    pub(crate) fn toggle_cursor(&mut self) -> Vec<Date> {
        self.selection.toggle(self.cursor);
        self.selection.dates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;
    use time::Weekday::Sunday;

    #[test]
    fn cursor_crosses_month_boundary() {
        let mut state = PickerState::new(date!(2024 - 03 - 31), Sunday);
        state.move_cursor(1).unwrap();
        assert_eq!(state.cursor_date(), date!(2024 - 04 - 01));
        state.move_cursor(-7).unwrap();
        assert_eq!(state.cursor_date(), date!(2024 - 03 - 25));
    }

    #[test]
    fn month_shift_round_trip() {
        let mut state = PickerState::new(date!(2024 - 03 - 10), Sunday);
        state.shift_month(1).unwrap();
        assert_eq!(state.cursor_date().month(), Month::April);
        state.shift_month(-1).unwrap();
        assert_eq!(state.cursor_date().month(), Month::March);
    }

    #[test]
    fn jump_to_today_restores_cursor() {
        let mut state = PickerState::new(date!(2024 - 03 - 10), Sunday);
        state.shift_month(5).unwrap();
        state.move_cursor(3).unwrap();
        state.jump_to_today();
        assert_eq!(state.cursor_date(), date!(2024 - 03 - 10));
    }

    #[test]
    fn toggle_reports_sorted_selection() {
        let mut state = PickerState::new(date!(2024 - 03 - 15), Sunday);
        assert_eq!(state.toggle_cursor(), vec![date!(2024 - 03 - 15)]);
        state.move_cursor(-5).unwrap();
        assert_eq!(
            state.toggle_cursor(),
            vec![date!(2024 - 03 - 10), date!(2024 - 03 - 15)]
        );
        assert_eq!(state.toggle_cursor(), vec![date!(2024 - 03 - 15)]);
    }
}

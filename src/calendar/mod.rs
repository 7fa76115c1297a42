mod grid;
mod select;
mod state;
mod widget;
pub(crate) use self::select::DayCategory;
pub(crate) use self::state::PickerState;
pub(crate) use self::widget::MonthView;
use time::Date;

/// Outbound notification hook: called with the full selection, sorted
/// ascending, after every toggle.
pub(crate) trait SelectionWatcher {
    fn selection_changed(&mut self, dates: &[Date]);
}

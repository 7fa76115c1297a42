use super::grid::{Cell, MonthGrid, WeekdayExt};
use super::select::DayCategory;
use super::state::PickerState;
use crate::fmt::{chip, month_header};
use crate::theme::{category_style, CHIP_STYLE, HEADER_STYLE, WEEKDAY_STYLE};
use ratatui::layout::Flex;
use ratatui::{prelude::*, widgets::*};
use time::{Date, Weekday};

/// Width of one day cell in columns
const DAY_WIDTH: u16 = 4;

/// Width of the seven-column grid
const MAIN_WIDTH: u16 = 7 * DAY_WIDTH;

/// Lines taken up by the navigation header, the weekday row, and its rule
const HEADER_LINES: u16 = 3;

/// Blank lines between the last week row and the chip list
const CHIP_GAP: u16 = 1;

const ACS_HLINE: char = '─';
const PREV_CHEVRON: char = '◀';
const NEXT_CHEVRON: char = '▶';

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MonthView;

impl MonthView {
    pub(crate) fn new() -> MonthView {
        MonthView
    }
}

impl StatefulWidget for MonthView {
    type State = PickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([MAIN_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let cursor = state.cursor_date();
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_nav_header(cursor);
        canvas.draw_weekday_header(state.week_start());
        let grid = MonthGrid::new(cursor, state.week_start());
        let mut week_rows = 0;
        for (row, week) in std::iter::zip(0u16.., grid.weeks()) {
            week_rows = row + 1;
            for cell in week {
                if let Cell::Day(date) = *cell {
                    let category = DayCategory::of(state.selection(), date);
                    let s = show_day(date, date == cursor, category);
                    canvas.draw_day(row, date.weekday().column(state.week_start()), s);
                }
            }
        }
        if !state.selection().is_empty() {
            canvas.draw_chips(HEADER_LINES + week_rows + CHIP_GAP, state.selection().dates());
        }
    }
}

fn show_day(date: Date, is_cursor: bool, category: DayCategory) -> Span<'static> {
    let s = if is_cursor {
        format!("[{:2}]", date.day())
    } else {
        format!(" {:2} ", date.day())
    };
    Span::styled(s, category_style(category))
}

fn short_weekday(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Su",
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_nav_header(&mut self, reference: Date) {
        self.mvaddch(0, 0, PREV_CHEVRON);
        self.mvaddch(0, MAIN_WIDTH - 1, NEXT_CHEVRON);
        let label = month_header(reference);
        let width = u16::try_from(label.len()).unwrap_or(u16::MAX);
        self.mvprint(
            0,
            MAIN_WIDTH.saturating_sub(width) / 2,
            label,
            Some(HEADER_STYLE),
        );
    }

    fn draw_weekday_header(&mut self, week_start: Weekday) {
        let mut wd = week_start;
        for col in 0..7u16 {
            self.mvprint(
                1,
                col * DAY_WIDTH,
                format!(" {} ", short_weekday(wd)),
                Some(WEEKDAY_STYLE),
            );
            wd = wd.next();
        }
        self.hline(2, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, column: u16, s: Span<'_>) {
        self.mvprint(
            week_no + HEADER_LINES,
            DAY_WIDTH * column,
            s.content,
            Some(s.style),
        );
    }

    fn draw_chips(&mut self, y: u16, dates: Vec<Date>) {
        let text = dates.into_iter().map(chip).collect::<Vec<_>>().join(" · ");
        self.mvprint(y, 0, text, Some(CHIP_STYLE));
    }

    fn mvaddch(&mut self, y: u16, x: u16, ch: char) {
        if y < self.area.height && x < self.area.width {
            self.buf[(x + self.area.x, y + self.area.y)].set_char(ch);
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // A Paragraph truncates text that would extend beyond the
            // widget's area; the Rect handed to it must stay inside the
            // frame, or rendering panics.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

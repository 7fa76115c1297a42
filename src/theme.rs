use crate::calendar::DayCategory;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const HEADER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

/// Earliest and latest picks: full emphasis
pub(crate) const ENDPOINT_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

/// Picked dates strictly inside the span: reduced emphasis
pub(crate) const INTERIOR_STYLE: Style = Style::new().fg(Color::LightYellow).bg(Color::Black);

/// Unpicked dates inside the span: shaded background, accent text
pub(crate) const IN_SPAN_STYLE: Style = Style::new().fg(Color::LightBlue).bg(Color::DarkGray);

pub(crate) const CHIP_STYLE: Style = Style::new().fg(Color::LightBlue).bg(Color::Black);

pub(crate) fn category_style(category: DayCategory) -> Style {
    match category {
        DayCategory::Plain => BASE_STYLE,
        DayCategory::Endpoint => ENDPOINT_STYLE,
        DayCategory::Interior => INTERIOR_STYLE,
        DayCategory::InSpan => IN_SPAN_STYLE,
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}

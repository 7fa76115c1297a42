use std::collections::BTreeSet;
use time::Date;

/// The set of picked dates, unique per calendar day, iterable in ascending
/// order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Selection(BTreeSet<Date>);

impl Selection {
    pub(crate) fn new() -> Selection {
        Selection::default()
    }

    /// Removes `date` if present, inserts it otherwise.  Self-inverse.
    pub(crate) fn toggle(&mut self, date: Date) {
        if !self.0.remove(&date) {
            self.0.insert(date);
        }
    }

    pub(crate) fn is_selected(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    fn bounds(&self) -> Option<(Date, Date)> {
        Some((*self.0.first()?, *self.0.last()?))
    }

    pub(crate) fn endpoint(&self, date: Date) -> Option<Endpoint> {
        let (start, end) = self.bounds()?;
        match (date == start, date == end) {
            (true, true) => Some(Endpoint::Both),
            (true, false) => Some(Endpoint::Start),
            (false, true) => Some(Endpoint::End),
            (false, false) => None,
        }
    }

    /// True only when at least two dates are picked and `date` lies between
    /// the earliest and latest picks, inclusive.  A lone pick has no span.
    pub(crate) fn in_span(&self, date: Date) -> bool {
        if self.0.len() < 2 {
            return false;
        }
        self.bounds()
            .is_some_and(|(start, end)| start <= date && date <= end)
    }

    pub(crate) fn dates(&self) -> Vec<Date> {
        self.0.iter().copied().collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Endpoint {
    Start,
    End,
    /// The selection is a singleton, so its one date is both ends at once.
    Both,
}

/// How a day cell should be emphasized, derived purely from the selection.
/// The mapping to concrete styles lives in the theme module so this stays
/// testable without a terminal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DayCategory {
    Plain,
    Endpoint,
    /// Picked, but strictly between the endpoints
    Interior,
    /// Between the endpoints without being picked
    InSpan,
}

impl DayCategory {
    pub(crate) fn of(selection: &Selection, date: Date) -> DayCategory {
        if selection.endpoint(date).is_some() {
            DayCategory::Endpoint
        } else if selection.is_selected(date) {
            DayCategory::Interior
        } else if selection.in_span(date) {
            DayCategory::InSpan
        } else {
            DayCategory::Plain
        }
    }
}

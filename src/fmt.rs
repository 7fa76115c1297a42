use time::{format_description::FormatItem, macros::format_description, Date};

static HEADER_FMT: &[FormatItem<'_>] = format_description!("[month repr:long] [year]");

static CHIP_FMT: &[FormatItem<'_>] = format_description!("[month repr:short] [day padding:none], [year]");

/// Full month name plus four-digit year, e.g. "March 2024"
pub(crate) fn month_header(date: Date) -> String {
    date.format(&HEADER_FMT).unwrap_or_else(|_| date.to_string())
}

/// Medium date used in the selection chip list, e.g. "Mar 10, 2024"
pub(crate) fn chip(date: Date) -> String {
    date.format(&CHIP_FMT).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_month_header() {
        assert_eq!(month_header(date!(2024 - 03 - 10)), "March 2024");
        assert_eq!(month_header(date!(987 - 12 - 01)), "December 0987");
    }

    #[test]
    fn test_chip() {
        assert_eq!(chip(date!(2024 - 03 - 10)), "Mar 10, 2024");
        assert_eq!(chip(date!(2024 - 03 - 09)), "Mar 9, 2024");
    }
}

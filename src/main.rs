mod app;
mod calendar;
mod fmt;
mod help;
mod jumpto;
mod theme;
use crate::app::App;
use crate::calendar::{PickerState, SelectionWatcher};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{
    format_description::FormatItem, macros::format_description, Date, OffsetDateTime, Weekday,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { date: Option<Date>, monday: bool },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut monday = false;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('m') | Arg::Long("monday") => monday = true,
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, monday })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, monday } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let week_start = if monday {
                    Weekday::Monday
                } else {
                    Weekday::Sunday
                };
                let mut state = PickerState::new(today, week_start);
                if let Some(date) = date {
                    state = state.cursor(date);
                }
                let picks = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut app = App::new(state, Report::default());
                    app.run(&mut terminal)?;
                    Ok(app.into_watcher().0)
                })?;
                for date in picks {
                    println!("{}", fmt::chip(date));
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: rangecal [-m] [YYYY-MM-DD]");
                println!();
                println!("Terminal calendar for picking dates, shading the span between the");
                println!("earliest and latest picks");
                println!();
                println!("Options:");
                println!("  -m, --monday      Start weeks on Monday instead of Sunday");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Remembers the most recent selection so it can be reported after the
/// terminal is restored.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Report(Vec<Date>);

impl SelectionWatcher for Report {
    fn selection_changed(&mut self, dates: &[Date]) {
        self.0 = dates.to_vec();
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

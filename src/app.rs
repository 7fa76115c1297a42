use crate::calendar::{MonthView, PickerState, SelectionWatcher};
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<W> {
    state: PickerState,
    screen: Screen,
    watcher: W,
}

impl<W: SelectionWatcher> App<W> {
    pub(crate) fn new(state: PickerState, watcher: W) -> App<W> {
        App {
            state,
            screen: Screen::Calendar,
            watcher,
        }
    }

    pub(crate) fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    pub(crate) fn into_watcher(self) -> W {
        self.watcher
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.screen = Screen::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.screen {
            Screen::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(7),
                KeyCode::Char('[') | KeyCode::PageUp => self.shift_month(-1),
                KeyCode::Char(']') | KeyCode::PageDown => self.shift_month(1),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.toggle();
                    true
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.state.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.screen = Screen::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.screen = Screen::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.screen = Screen::Helping;
                    true
                }
                _ => false,
            },
            Screen::Helping => {
                self.screen = Screen::Calendar;
                true
            }
            Screen::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.screen = Screen::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c @ '0'..='9') => {
                            let digit = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                            match digit {
                                Some(d) => state.handle_input(JumpToInput::Digit(d)),
                                None => JumpToOutput::Invalid,
                            }
                        }
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            self.screen = Screen::Calendar;
                            self.state.jump_to_month(date);
                            true
                        }
                    }
                }
            }
            Screen::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.screen == Screen::Quitting
    }

    fn move_cursor(&mut self, days: i64) -> bool {
        self.state.move_cursor(days).is_ok()
    }

    fn shift_month(&mut self, delta: i32) -> bool {
        self.state.shift_month(delta).is_ok()
    }

    fn toggle(&mut self) {
        let dates = self.state.toggle_cursor();
        self.watcher.selection_changed(&dates);
    }
}

impl<W: SelectionWatcher> Widget for &mut App<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        MonthView::new().render(area, buf, &mut self.state);
        if self.screen == Screen::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let Screen::Jumping(ref mut state) = self.screen {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Screen {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

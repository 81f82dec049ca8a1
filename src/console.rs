//! Terminal boundary: the only module that touches a real terminal.
//!
//! The menu core reads and writes exclusively through the [`Console`]
//! trait, so everything above this line is testable without a TTY and the
//! blocking keypress read can be replaced wholesale (e.g. by a
//! cancellation-aware wrapper) without touching the model.
//!
//! [`StdConsole`] is the crossterm-backed implementation. It holds raw
//! mode only for the duration of a single `read_token` call, so bound
//! commands print through a normal cooked terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::ExecutableCommand;

/// Token produced by the left-navigation key (and the left arrow).
pub const NAV_LEFT: &str = "a";

/// Token produced by the right-navigation key (and the right arrow).
pub const NAV_RIGHT: &str = "d";

// ============================================================================
// BOUNDARY TRAIT
// ============================================================================

/// The three operations the menu core needs from a terminal.
pub trait Console {
    /// Append text to the output stream.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Block until one input unit is available and return its raw textual
    /// form: a navigation key, a (possibly multi-digit) number, or any
    /// other single key. Blocks indefinitely — cancellation, if needed,
    /// belongs in the implementation, not in the menu model.
    fn read_token(&mut self) -> io::Result<String>;

    /// Reset the visible terminal area.
    fn clear_screen(&mut self) -> io::Result<()>;
}

// ============================================================================
// CROSSTERM IMPLEMENTATION
// ============================================================================

/// Real terminal on stdout, keypresses via crossterm events.
pub struct StdConsole {
    out: io::Stdout,
}

impl StdConsole {
    pub fn new() -> StdConsole {
        StdConsole { out: io::stdout() }
    }

    /// Keypress interpretation, running with raw mode already enabled.
    ///
    /// Single-key tokens (navigation letters, arrows, anything that is not
    /// a digit) return immediately. Digits echo and accumulate until Enter,
    /// honoring backspace, so multi-digit selections work on pages with
    /// more than nine elements.
    fn read_token_raw(&mut self) -> io::Result<String> {
        let mut digits = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Raw mode suppresses SIGINT; surface Ctrl+C as an error so
            // the loop can unwind and the process can die normally.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "Ctrl+C"));
            }

            match key.code {
                KeyCode::Left if digits.is_empty() => return Ok(NAV_LEFT.to_string()),
                KeyCode::Right if digits.is_empty() => return Ok(NAV_RIGHT.to_string()),

                KeyCode::Enter => return Ok(digits),
                KeyCode::Esc => return Ok(String::new()),

                KeyCode::Backspace => {
                    if digits.pop().is_some() {
                        // Erase the echoed digit.
                        write!(self.out, "\u{8} \u{8}")?;
                        self.out.flush()?;
                    } else {
                        return Ok(String::new());
                    }
                }

                KeyCode::Char(c) => {
                    if c.is_ascii_digit() {
                        digits.push(c);
                        write!(self.out, "{c}")?;
                        self.out.flush()?;
                    } else if digits.is_empty() {
                        // Navigation letters and everything else are
                        // single-key tokens; the model decides what they mean.
                        return Ok(c.to_string());
                    }
                    // Non-digit while accumulating: ignored.
                }

                _ => {}
            }
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        StdConsole::new()
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn read_token(&mut self) -> io::Result<String> {
        enable_raw_mode()?;
        let token = self.read_token_raw();
        disable_raw_mode()?;

        if token.is_ok() {
            // Enter does not echo in raw mode; move past the prompt line.
            writeln!(self.out)?;
            self.out.flush()?;
        }

        token
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.out.execute(Clear(ClearType::All))?;
        self.out.execute(MoveTo(0, 0))?;
        Ok(())
    }
}

// ============================================================================
// TEST DOUBLE
// ============================================================================

/// Scripted console for tests: replays queued tokens, captures writes,
/// counts screen clears. `read_token` fails once the script runs out,
/// which is also how loop tests terminate `Ui::run`.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    tokens: std::collections::VecDeque<String>,
    pub output: String,
    pub clears: usize,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(tokens: &[&str]) -> ScriptedConsole {
        ScriptedConsole {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            output: String::new(),
            clears: 0,
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_token(&mut self) -> io::Result<String> {
        self.tokens
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_tokens_are_distinct_single_keys() {
        assert_ne!(NAV_LEFT, NAV_RIGHT);
        assert_eq!(NAV_LEFT.len(), 1);
        assert_eq!(NAV_RIGHT.len(), 1);
        // Navigation letters must never be mistaken for selections.
        assert!(NAV_LEFT.parse::<usize>().is_err());
        assert!(NAV_RIGHT.parse::<usize>().is_err());
    }

    #[test]
    fn scripted_console_replays_in_order_then_fails() {
        let mut console = ScriptedConsole::new(&["d", "2"]);
        assert_eq!(console.read_token().unwrap(), "d");
        assert_eq!(console.read_token().unwrap(), "2");
        assert_eq!(
            console.read_token().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn scripted_console_captures_writes_and_clears() {
        let mut console = ScriptedConsole::new(&[]);
        console.write("menu\n").unwrap();
        console.write(">>> ").unwrap();
        console.clear_screen().unwrap();

        assert_eq!(console.output, "menu\n>>> ");
        assert_eq!(console.clears, 1);
    }
}

//! Console prompts and the quit-key wait.
//!
//! Prompting happens before the stream starts, on the main thread; the
//! generators never touch the console. The retry loop follows the classic
//! teaching-demo contract: keep asking until a value parses and lies within
//! bounds, and treat `max <= min` as "no upper bound".

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Prompts on stdout and reads lines from stdin until one parses as a
/// number within `[min, max]`. `max <= min` disables the upper bound.
///
/// # Errors
///
/// Fails only on I/O errors or if stdin is closed mid-prompt; bad input is
/// answered with a re-prompt, never an error.
pub fn prompt_number(message: &str, min: f64, max: f64) -> io::Result<f64> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_from(&mut stdin.lock(), &mut stdout.lock(), message, min, max)
}

/// Integer variant of [`prompt_number`], with the same retry and bound
/// rules.
pub fn prompt_integer(message: &str, min: i64, max: i64) -> io::Result<i64> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_from(&mut stdin.lock(), &mut stdout.lock(), message, min, max)
}

fn prompt_from<T, R, W>(
    input: &mut R,
    output: &mut W,
    message: &str,
    min: T,
    max: T,
) -> io::Result<T>
where
    T: FromStr + PartialOrd + Copy,
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while prompting",
            ));
        }
        if let Ok(value) = line.trim().parse::<T>() {
            if value >= min && (max <= min || value <= max) {
                return Ok(value);
            }
        }
        write!(output, "\nBad input. {message}")?;
        output.flush()?;
    }
}

/// Blocks until the user presses a key.
///
/// Puts the terminal into raw mode so a single keypress (no Enter) is
/// enough, and restores it before returning.
pub fn wait_for_keypress() -> io::Result<()> {
    enable_raw_mode()?;
    let result = wait_for_press();
    disable_raw_mode()?;
    result
}

fn wait_for_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

use is_terminal::IsTerminal;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

// ---------------------------------------------------------------------------
// ANSI colour
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `msg` in `color` when `enabled`.
pub fn paint(msg: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}{msg}{RESET}", color.code())
    } else {
        msg.to_string()
    }
}

/// Print a line to stdout, coloured only when stdout is a terminal.
pub fn println_colored(msg: &str, color: Color) {
    println!("{}", paint(msg, color, std::io::stdout().is_terminal()));
}

/// Print an error line to stderr in red when stderr is a terminal.
pub fn print_error(msg: &str) {
    eprintln!("{}", paint(msg, Color::Red, std::io::stderr().is_terminal()));
}

//! ANSI-colored terminal messages.

use std::fmt::Display;

/// Terminal colors used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `text` in the color's escape codes.
pub fn paint(color: Color, text: impl Display) -> String {
    format!("{}{}{}", color.code(), text, RESET)
}

/// Format an error line the way the CLI reports failures: `<context>: <error>`.
pub fn error_line(context: &str, err: impl Display) -> String {
    paint(Color::Red, format!("{}: {}", context, err))
}

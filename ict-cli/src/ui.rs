use nu_ansi_term::Color;
use std::io::{self, IsTerminal};

/// Whether each output stream gets ANSI colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChoice {
    pub stdout: bool,
    pub stderr: bool,
}

impl ColorChoice {
    /// Colour each stream only when it is a terminal and colour is not disabled
    pub fn detect(no_color: bool) -> Self {
        Self::from_flags(
            no_color,
            io::stdout().is_terminal(),
            io::stderr().is_terminal(),
        )
    }

    pub fn from_flags(no_color: bool, stdout_is_terminal: bool, stderr_is_terminal: bool) -> Self {
        Self {
            stdout: !no_color && stdout_is_terminal,
            stderr: !no_color && stderr_is_terminal,
        }
    }
}

pub fn error(text: &str, use_color: bool) -> String {
    paint(Color::Red.bold(), text, use_color)
}

pub fn info(text: &str, use_color: bool) -> String {
    paint(Color::Cyan.normal(), text, use_color)
}

pub fn target(text: &str, use_color: bool) -> String {
    paint(Color::Green.bold(), text, use_color)
}

fn paint(style: nu_ansi_term::Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

//! Terminal output for the tools: confirmation on stdout, errors on stderr.

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::fmt::Display;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Styled output is used only when enabled and stderr is a terminal.
    pub fn new(color: bool) -> Self {
        Self {
            color: color && std::io::stderr().is_tty(),
        }
    }

    pub fn confirm(&self, line: &str) {
        println!("{line}");
    }

    pub fn error(&self, err: &dyn Display) {
        eprintln!("{}", self.error_line(err));
    }

    fn error_line(&self, err: &dyn Display) -> String {
        if self.color {
            format!("{} {err}", "error:".red().bold())
        } else {
            format!("error: {err}")
        }
    }
}

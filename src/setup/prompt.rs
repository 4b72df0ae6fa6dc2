// SPDX-License-Identifier: MPL-2.0
//! Line-based prompt: a numbered menu and free-text answers.

use super::style::{BRIGHT, GRAY, RESET};
use crate::config::defaults::{ROOT_THEME_PATH, STYLES_THEME_PATH};
use std::io::{self, BufRead, Write};

/// Menu entries offered by the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `./nuke-theme` (also picked by an empty answer)
    Root,
    /// `./src/styles/nuke-theme`
    Styles,
    /// Ask for a path
    Custom,
    /// Do nothing
    Skip,
}

impl Choice {
    /// Parses a menu answer. Returns `None` for anything not on the menu.
    #[must_use]
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" | "" => Some(Choice::Root),
            "2" => Some(Choice::Styles),
            "3" => Some(Choice::Custom),
            "4" => Some(Choice::Skip),
            _ => None,
        }
    }

    /// Install location of the fixed entries.
    #[must_use]
    pub fn preset_path(self) -> Option<&'static str> {
        match self {
            Choice::Root => Some(ROOT_THEME_PATH),
            Choice::Styles => Some(STYLES_THEME_PATH),
            Choice::Custom | Choice::Skip => None,
        }
    }
}

/// Question/answer channel over any reader and writer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and reads one line.
    ///
    /// Returns `None` at end of input; the line is returned without its
    /// trailing newline.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{BRIGHT}{question}{RESET} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writer the installer prints its messages to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Prints the numbered install menu.
pub fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{BRIGHT}[1]{RESET} Root directory ({ROOT_THEME_PATH}/)         {GRAY}\u{2190} Recommended{RESET}"
    )?;
    writeln!(out, "{BRIGHT}[2]{RESET} {}/", STYLES_THEME_PATH.trim_start_matches("./"))?;
    writeln!(out, "{BRIGHT}[3]{RESET} Custom path (type your own)")?;
    writeln!(out, "{BRIGHT}[4]{RESET} Skip (I'll copy it manually later)")?;
    writeln!(out)
}

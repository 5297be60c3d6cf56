// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal environment and styling utilities.
//!
//! These functions use OSC (Operating System Command) escape sequences, which
//! most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support. Terminals
//! that do not simply ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

/// Paints the whole terminal window background with an OSC 11 sequence.
///
/// Only RGB colours can be expressed this way, any other colour leaves the
/// background untouched.
pub(crate) fn set_terminal_bg(colour: Color) {
    if let Some(hex) = to_hex(colour) {
        print!("\x1b]11;{}\x07", hex);
        let _ = io::stdout().flush();
    }
}

/// Resets the terminal background to the user's own configuration (OSC 111).
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    let _ = io::stdout().flush();
}

fn to_hex(colour: Color) -> Option<String> {
    match colour {
        Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rgb_colours_have_a_hex_form() {
        assert_eq!(to_hex(Color::Rgb(40, 20, 50)).as_deref(), Some("#281432"));
        assert_eq!(to_hex(Color::Blue), None);
    }
}

//! Terminal rendering of the board, messages and histogram

use super::formatters::{
    Cell, GUESS_INDENT, Highlight, SCREEN_WIDTH, guess_cells, histogram_line, keyboard_rows,
    title_banner, wrap_text,
};
use crate::game::GameSession;
use crate::store::Histogram;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Render a cell with its background highlight
#[must_use]
pub fn paint(cell: Cell) -> String {
    let text = cell.text.to_string();
    match cell.highlight {
        Highlight::Plain => text,
        Highlight::Yellow => text.on_yellow().to_string(),
        Highlight::Green => text.on_green().to_string(),
    }
}

fn paint_all(cells: &[Cell], separator: &str) -> String {
    cells
        .iter()
        .map(|&cell| paint(cell))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Clear the screen and print the banner, past guesses and keyboard
///
/// # Errors
/// Returns any I/O error from the output stream.
pub fn print_game<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", title_banner())?;

    for record in session.guesses() {
        writeln!(
            out,
            "{}{}",
            " ".repeat(GUESS_INDENT),
            paint_all(&guess_cells(record), "")
        )?;
    }

    for (indent, cells) in keyboard_rows(session.knowledge()) {
        writeln!(out, "{}{}", " ".repeat(indent), paint_all(&cells, " "))?;
    }

    out.flush()
}

/// Print a message wrapped to the screen width
///
/// # Errors
/// Returns any I/O error from the output stream.
pub fn print_message<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for line in wrap_text(text, SCREEN_WIDTH) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print one `N:***` line per guess count
///
/// # Errors
/// Returns any I/O error from the output stream.
pub fn print_histogram<W: Write>(out: &mut W, histogram: &Histogram) -> io::Result<()> {
    for (guesses, width) in histogram.bars() {
        writeln!(out, "{}", histogram_line(guesses, width))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn render(session: &GameSession) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_game(&mut out, session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn print_game_shows_guesses_and_keyboard() {
        let mut session = GameSession::new(Word::new("crane").unwrap());
        session.submit(Word::new("react").unwrap()).unwrap();

        let screen = render(&session);
        let lines: Vec<&str> = screen.lines().collect();

        assert!(lines[0].ends_with("~~~~~ Worble! ~~~~~"));
        assert_eq!(lines[1], "       react");
        assert_eq!(lines[2], "q w e r _ y u i o p");
        assert_eq!(lines[3], " a s d f g h j k l");
        assert_eq!(lines[4], "  z x c v b n m");
    }

    #[test]
    fn paint_plain_has_no_escape() {
        assert_eq!(paint(Cell::new('x', Highlight::Plain)), "x");
    }

    #[test]
    fn print_message_wraps() {
        let mut out = Vec::new();
        print_message(&mut out, "The word was: crane Better luck").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The word was: crane\nBetter luck\n"
        );
    }

    #[test]
    fn print_histogram_lines() {
        let histogram = Histogram::from_guess_counts(&[2, 2, 3]);
        let mut out = Vec::new();
        print_histogram(&mut out, &histogram).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1:\n2:**\n3:*\n4:\n5:\n6:\n"
        );
    }
}

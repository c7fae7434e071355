//! Formatting utilities for terminal output

use crate::core::{Card, GridRank};
use crate::layout::wrap_with;

/// Default character width of one cell in text grids
pub const DEFAULT_CELL_CHARS: usize = 12;

/// Render `card` as a box-drawn text grid
///
/// Cell text wraps on whitespace; a word longer than a cell is split across
/// lines so it still appears in full.
///
/// # Examples
/// ```
/// use bingo_builder::core::{Card, GridRank};
/// use bingo_builder::output::formatters::format_card;
///
/// let rank = GridRank::square(2).unwrap();
/// let card = Card::new(vec!["A".into(), "B".into(), "C".into(), "D".into()]);
/// let lines = format_card(&card, rank, 3);
/// assert_eq!(lines[0], "┌─────┬─────┐");
/// assert_eq!(lines[1], "│  A  │  B  │");
/// ```
#[must_use]
pub fn format_card(card: &Card, rank: GridRank, cell_chars: usize) -> Vec<String> {
    let cell_chars = cell_chars.max(1);
    let cols = rank.cols();
    let mut lines = vec![border('┌', '┬', '┐', cols, cell_chars)];

    for (row_index, row) in card.rows(cols).enumerate() {
        if row_index > 0 {
            lines.push(border('├', '┼', '┤', cols, cell_chars));
        }

        let wrapped: Vec<Vec<String>> = row.iter().map(|word| wrap_cell(word, cell_chars)).collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);

        for line_index in 0..height {
            let mut line = String::from("│");
            for cell in &wrapped {
                let text = cell.get(line_index).map_or("", String::as_str);
                line.push_str(&center(text, cell_chars + 2));
                line.push('│');
            }
            lines.push(line);
        }
    }

    lines.push(border('└', '┴', '┘', cols, cell_chars));
    lines
}

/// Wrap one cell's text into lines of at most `width` characters
#[must_use]
pub fn wrap_cell(text: &str, width: usize) -> Vec<String> {
    wrap_with(text, width as f32, |s| s.chars().count() as f32, 1.0)
        .into_iter()
        .flat_map(|line| split_long(&line, width))
        .collect()
}

/// A bar of `width` characters filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn border(left: char, middle: char, right: char, cols: usize, cell_chars: usize) -> String {
    let segment = "─".repeat(cell_chars + 2);
    let mut line = String::new();
    line.push(left);
    for col in 0..cols {
        if col > 0 {
            line.push(middle);
        }
        line.push_str(&segment);
    }
    line.push(right);
    line
}

fn split_long(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= width {
        return vec![line.to_string()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let padding = width.saturating_sub(len);
    let left = padding / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(padding - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_card() -> Card {
        Card::new(
            [
                "Coffee",
                "Remote Work",
                "Zoom Call",
                "Deadline",
                "Email",
                "Meeting",
                "Laptop",
                "Team Chat",
                "Project",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        )
    }

    #[test]
    fn grid_lines_have_equal_width() {
        let lines = format_card(&office_card(), GridRank::square(3).unwrap(), 8);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(lines.last().unwrap().starts_with('└'));
    }

    #[test]
    fn every_word_appears() {
        let lines = format_card(&office_card(), GridRank::square(3).unwrap(), 8);
        let text = lines.join(" ");
        for word in ["Coffee", "Remote", "Work", "Deadline", "Project"] {
            assert!(text.contains(word), "{word} missing");
        }
    }

    #[test]
    fn rows_are_separated() {
        let lines = format_card(&office_card(), GridRank::square(3).unwrap(), 12);
        assert_eq!(lines.iter().filter(|l| l.starts_with('├')).count(), 2);
    }

    #[test]
    fn wrap_cell_splits_long_words() {
        assert_eq!(wrap_cell("Remote Work", 6), vec!["Remote", "Work"]);
        assert_eq!(wrap_cell("Microphone", 4), vec!["Micr", "opho", "ne"]);
    }

    #[test]
    fn center_pads_evenly() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn progress_bar_fill() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(200, 100, 4), "████");
        assert_eq!(create_progress_bar(1, 0, 3), "░░░");
    }
}

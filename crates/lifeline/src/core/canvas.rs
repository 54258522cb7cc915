//! Character grid the renderer draws into
//!
//! Rows grow on demand. Wide characters occupy two cells: the glyph itself and
//! a continuation cell that is skipped when the grid is turned back into text.

use super::text::char_width;

const CONTINUATION: char = '\0';

/// ASCII canvas representing a character grid for diagram rendering
#[derive(Debug, Clone, Default)]
pub struct AsciiCanvas {
    pub width: usize,
    pub height: usize,
    grid: Vec<Vec<char>>,
}

impl AsciiCanvas {
    /// Create a new canvas with the specified dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![vec![' '; width]; height],
        }
    }

    /// Ensure the canvas is at least the specified size, expanding if needed
    pub fn ensure_size(&mut self, min_width: usize, min_height: usize) {
        if min_width > self.width {
            for row in &mut self.grid {
                row.resize(min_width, ' ');
            }
            self.width = min_width;
        }
        if min_height > self.height {
            let extra_rows = min_height - self.height;
            self.grid
                .extend((0..extra_rows).map(|_| vec![' '; self.width]));
            self.height = min_height;
        }
    }

    /// Set a character at the specified position.
    ///
    /// Overwriting either half of a wide glyph blanks the other half.
    pub fn set_char(&mut self, x: usize, y: usize, c: char) {
        let width = char_width(c);
        self.ensure_size(x + width, y + 1);
        for column in x..x + width {
            self.clear_cell(column, y);
        }
        self.grid[y][x] = c;
        if width == 2 {
            self.grid[y][x + 1] = CONTINUATION;
        }
    }

    /// Draw text at the specified position (left-aligned)
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        let mut column = x;
        for c in text.chars() {
            self.set_char(column, y, c);
            column += char_width(c);
        }
    }

    /// Rows as text with trailing whitespace removed
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| {
                let s: String = row.iter().filter(|c| **c != CONTINUATION).collect();
                s.trim_end().to_string()
            })
            .collect()
    }

    fn clear_cell(&mut self, x: usize, y: usize) {
        match self.grid[y][x] {
            CONTINUATION if x > 0 => self.grid[y][x - 1] = ' ',
            c if char_width(c) == 2 && x + 1 < self.width => self.grid[y][x + 1] = ' ',
            _ => {}
        }
        self.grid[y][x] = ' ';
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = AsciiCanvas::new(10, 5);
        assert_eq!(canvas.width, 10);
        assert_eq!(canvas.height, 5);
        assert_eq!(canvas.rows(), vec![""; 5]);
    }

    #[test]
    fn test_set_char() {
        let mut canvas = AsciiCanvas::new(10, 4);
        canvas.set_char(5, 3, 'X');
        assert_eq!(canvas.rows()[3], "     X");
        assert_eq!(canvas.rows()[0], "");
    }

    #[test]
    fn test_auto_expand() {
        let mut canvas = AsciiCanvas::new(0, 0);
        canvas.set_char(10, 10, 'X');
        assert!(canvas.width >= 11);
        assert!(canvas.height >= 11);
        assert_eq!(canvas.rows()[10], "          X");
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = AsciiCanvas::new(0, 1);
        canvas.draw_text(2, 0, "┤ hi ├");
        assert_eq!(canvas.rows(), vec!["  ┤ hi ├"]);
    }

    #[test]
    fn test_rows_keep_blank_rows() {
        let mut canvas = AsciiCanvas::new(0, 0);
        canvas.set_char(1, 0, '│');
        canvas.set_char(1, 2, '│');
        assert_eq!(canvas.rows(), vec![" │", "", " │"]);
    }

    #[test]
    fn test_wide_characters_take_two_cells() {
        let mut canvas = AsciiCanvas::new(0, 1);
        canvas.draw_text(0, 0, "日x");
        canvas.set_char(3, 0, '│');
        assert_eq!(canvas.rows(), vec!["日x│"]);
    }

    #[test]
    fn test_overwriting_half_of_wide_character() {
        let mut canvas = AsciiCanvas::new(0, 1);
        canvas.draw_text(0, 0, "日本");
        canvas.set_char(1, 0, '│');
        assert_eq!(canvas.rows(), vec![" │本"]);
    }
}

//! ASCII position diagrams.
//!
//! Diagrams are the fixture format for tests and benchmarks: one line
//! per row, top row first, `X` for black, `O` for white, `.` for empty.
//! Spaces inside a line and blank surrounding lines are ignored, so
//! diagrams written in raw strings can be indented freely. The parser is
//! the inverse of the board's `Display` rendering.

use crate::board::Board;
use crate::error::BoardError;
use seki_core::{Color, Pt};

impl Board {
    /// Parse a position diagram into a board.
    ///
    /// The board size is the number of non-blank lines, which must equal
    /// the number of cells in every line.
    ///
    /// # Examples
    ///
    /// ```
    /// use seki_board::Board;
    ///
    /// let board = Board::from_diagram(
    ///     ". X .
    ///      X . X
    ///      . X .",
    /// )
    /// .unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.stone_count(), 4);
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect())
            .filter(|l: &Vec<char>| !l.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardError::BadDiagram {
                reason: "no rows".into(),
            });
        }
        let size = rows.len();
        let mut board = Board::new(size)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardError::BadDiagram {
                    reason: format!(
                        "row {} has {} cells, expected {size}",
                        i + 1,
                        row.len()
                    ),
                });
            }
            // Diagrams list the top row first; Pt rows count from the bottom.
            let r = (size - 1 - i) as u8;
            for (c, &ch) in row.iter().enumerate() {
                let p = Pt::new(r, c as u8);
                match ch {
                    '.' => {}
                    'X' | 'x' | '#' => board.put_stone(p, Color::Black)?,
                    'O' | 'o' | '@' => board.put_stone(p, Color::White)?,
                    other => {
                        return Err(BoardError::BadDiagram {
                            reason: format!("unknown cell '{other}' at {p}"),
                        })
                    }
                }
            }
        }
        Ok(board)
    }
}

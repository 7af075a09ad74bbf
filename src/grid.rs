use crate::error::{Result, SudokuError};
use std::fmt;

/// 27 groups (9 lines, 9 columns, 9 boxes), each worth at most 9 distinct digits.
pub const WINNING_SCORE: u32 = 3 * 9 * 9;

const SIZE: usize = 9;
const BLANK: u8 = b'.';

/// Center cell of each of the 9 non-overlapping 3x3 boxes.
const BOX_CENTERS: [(usize, usize); 9] = [
    (1, 1), (1, 4), (1, 7),
    (4, 1), (4, 4), (4, 7),
    (7, 1), (7, 4), (7, 7),
];

/// Offsets from a box center to its 9 cells.
const BOX_OFFSETS: [(isize, isize); 9] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 0), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Digits proposed for the blank cells, one ASCII digit per blank,
/// in row-major scan order.
pub type FillingString = Vec<u8>;

/// The immutable puzzle template: given digits plus `.` blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    template: [[u8; SIZE]; SIZE],
    missing: usize,
}

/// A fully filled 9x9 grid derived from a template and a filling string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledGrid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// Parse a template from 9 lines of 9 characters, digits `1`-`9` or `.`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        if lines.len() != SIZE {
            return Err(SudokuError::InvalidTemplate(format!(
                "expected {} lines, got {}",
                SIZE,
                lines.len()
            )));
        }

        let mut template = [[BLANK; SIZE]; SIZE];
        let mut missing = 0;
        for (line_idx, line) in lines.iter().enumerate() {
            let bytes = line.as_ref().as_bytes();
            if bytes.len() != SIZE {
                return Err(SudokuError::InvalidTemplate(format!(
                    "line {} has {} characters, expected {}",
                    line_idx + 1,
                    bytes.len(),
                    SIZE
                )));
            }
            for (col, &cell) in bytes.iter().enumerate() {
                match cell {
                    b'1'..=b'9' => {}
                    BLANK => missing += 1,
                    other => {
                        return Err(SudokuError::InvalidTemplate(format!(
                            "invalid character {:?} at line {}, column {}",
                            other as char,
                            line_idx + 1,
                            col + 1
                        )));
                    }
                }
                template[line_idx][col] = cell;
            }
        }

        Ok(Self { template, missing })
    }

    /// Number of blank cells the filling string must cover.
    pub fn missing_count(&self) -> usize {
        self.missing
    }

    /// Whether the template gives a digit at this cell.
    pub fn is_given(&self, line: usize, col: usize) -> bool {
        self.template[line][col] != BLANK
    }

    /// Overlay a filling string onto the blanks in row-major order.
    /// Given cells are copied verbatim.
    pub fn fill(&self, filling: &FillingString) -> Result<FilledGrid> {
        if filling.len() != self.missing {
            return Err(SudokuError::LengthMismatch {
                expected: self.missing,
                actual: filling.len(),
            });
        }

        let mut cells = self.template;
        let mut digits = filling.iter();
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == BLANK {
                    // fill() checked the length, one digit exists per blank
                    *cell = *digits.next().unwrap();
                }
            }
        }
        Ok(FilledGrid { cells })
    }

    /// Fitness of a filled grid: the sum over all 27 groups of the count of
    /// distinct non-blank digits in that group. `WINNING_SCORE` means every
    /// line, column, and box holds all nine digits.
    pub fn evaluate(&self, filled: &FilledGrid) -> u32 {
        let mut score = 0;

        for row in &filled.cells {
            score += group_score(row.iter().copied());
        }

        for col in 0..SIZE {
            score += group_score((0..SIZE).map(|line| filled.cells[line][col]));
        }

        for &(line, col) in &BOX_CENTERS {
            score += group_score(BOX_OFFSETS.iter().map(|&(dl, dc)| {
                filled.cells[(line as isize + dl) as usize][(col as isize + dc) as usize]
            }));
        }

        score
    }

    /// HTML rendering of a filled grid, with originally-blank cells colored
    /// to stand apart from the given clues.
    pub fn render_html(&self, filled: &FilledGrid) -> String {
        let mut html = String::new();
        html.push_str("<html>");
        html.push_str(
            "<style>span { padding: 15px } \
             table, tr, td { border:1px solid gray; border-collapse: collapse; \
             font-size: larger; font-family: Consolas } \
             html { background-color: black; color: white; }</style>",
        );
        html.push_str("<table>");
        for line in 0..SIZE {
            html.push_str("<tr>");
            for col in 0..SIZE {
                html.push_str("<td>");
                if self.is_given(line, col) {
                    html.push_str("<span>");
                } else {
                    html.push_str("<span style=\"color: lightblue\">");
                }
                html.push(filled.cells[line][col] as char);
                html.push_str("</span></td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</table></html>");
        html
    }
}

impl FilledGrid {
    pub fn cell(&self, line: usize, col: usize) -> char {
        self.cells[line][col] as char
    }
}

impl fmt::Display for FilledGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &cell in row {
                write!(f, "{}", cell as char)?;
            }
        }
        Ok(())
    }
}

/// Distinct non-blank digits in one group of 9 cells.
fn group_score(cells: impl Iterator<Item = u8>) -> u32 {
    let mut seen: u16 = 0;
    for cell in cells {
        if cell != BLANK {
            seen |= 1u16 << (cell - b'1');
        }
    }
    seen.count_ones()
}

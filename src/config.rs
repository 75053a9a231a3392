//! Per-game configuration that is not a fixed gameplay constant.

use std::str::FromStr;

use crate::constants::COVER_DEFAULT_SIZE;
use crate::error::{Error, Result};

/// Bitmap of a single cover block, row-major.  Each set cell becomes one
/// destructible segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverShape {
    rows: Vec<Vec<bool>>,
}

impl CoverShape {
    /// A fully filled `size`×`size` block.
    pub fn solid(size: usize) -> Self {
        CoverShape {
            rows: vec![vec![true; size]; size],
        }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row; shorter rows are treated as padded with empty cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn filled_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c).count()
    }
}

impl Default for CoverShape {
    fn default() -> Self {
        CoverShape::solid(COVER_DEFAULT_SIZE)
    }
}

/// Parses rows of `x`/`#` (filled) and `.`/space (empty).  Blank lines are
/// skipped.
impl FromStr for CoverShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (lineno, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|c| match c {
                    'x' | 'X' | '#' => Ok(true),
                    '.' | ' ' => Ok(false),
                    other => Err(Error::CoverShape(format!(
                        "unexpected {other:?} on line {}",
                        lineno + 1
                    ))),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        let shape = CoverShape { rows };
        if shape.filled_cells() == 0 {
            return Err(Error::CoverShape("no filled cells".to_string()));
        }
        Ok(shape)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub cover_shape: CoverShape,
}

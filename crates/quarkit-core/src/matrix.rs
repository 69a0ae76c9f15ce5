//! Module matrix
//!
//! The dark/light grid produced by a QR symbol encoder. Renderers only read
//! it; the mutating helpers exist for callers and tests that assemble one.

use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Side length of a finder pattern, in modules.
pub const FINDER_PATTERN_SIZE: usize = 7;

/// A single module of the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Dark,
    Light,
}

impl Module {
    pub fn is_dark(self) -> bool {
        self == Module::Dark
    }
}

impl From<bool> for Module {
    fn from(dark: bool) -> Self {
        if dark {
            Module::Dark
        } else {
            Module::Light
        }
    }
}

/// Fixed-size grid of modules, addressed as `(x, y)` with `y` growing down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMatrix {
    width: usize,
    height: usize,
    modules: Vec<Module>,
}

impl ModuleMatrix {
    /// Create an all-light matrix.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            modules: vec![Module::Light; width * height],
        }
    }

    /// Build from rows of booleans (`true` is dark).
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MatrixError::Empty);
        }

        let mut modules = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            modules.extend(cells.into_iter().map(Module::from));
        }

        Ok(Self {
            width,
            height,
            modules,
        })
    }

    /// Parse a textual matrix, one row per line.
    ///
    /// `#`, `X` and `1` are dark; `.`, `0` and space are light. Empty lines
    /// are ignored.
    pub fn parse(text: &str) -> Result<Self, MatrixError> {
        let mut rows = Vec::new();
        for line in text.lines().filter(|l| !l.is_empty()) {
            let row_index = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(column, c)| match c {
                    '#' | 'X' | '1' => Ok(true),
                    '.' | '0' | ' ' => Ok(false),
                    found => Err(MatrixError::InvalidCell {
                        row: row_index,
                        column,
                        found,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        let matrix = Self::from_rows(rows)?;
        debug!(width = matrix.width, height = matrix.height, "Parsed module matrix");
        Ok(matrix)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Module at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Module {
        assert!(x < self.width && y < self.height, "module ({x}, {y}) out of bounds");
        self.modules[y * self.width + x]
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        assert!(x < self.width && y < self.height, "module ({x}, {y}) out of bounds");
        self.modules[y * self.width + x] = module;
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    /// Whether the matrix is large enough to carry the three finder patterns.
    pub fn has_finder_patterns(&self) -> bool {
        self.width >= FINDER_PATTERN_SIZE && self.height >= FINDER_PATTERN_SIZE
    }

    /// Copy of the matrix with the top-left, top-right and bottom-left
    /// finder pattern areas cleared, so eyes can be drawn in their place.
    /// Matrices too small for finder patterns are returned unchanged.
    pub fn without_finder_patterns(&self) -> ModuleMatrix {
        let mut matrix = self.clone();
        if !self.has_finder_patterns() {
            trace!(
                width = self.width,
                height = self.height,
                "Matrix too small for finder patterns"
            );
            return matrix;
        }

        let right = self.width - FINDER_PATTERN_SIZE;
        let bottom = self.height - FINDER_PATTERN_SIZE;
        for (ox, oy) in [(0, 0), (right, 0), (0, bottom)] {
            for y in oy..oy + FINDER_PATTERN_SIZE {
                for x in ox..ox + FINDER_PATTERN_SIZE {
                    matrix.set(x, y, Module::Light);
                }
            }
        }
        matrix
    }
}

impl fmt::Display for ModuleMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = if self.is_dark(x, y) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

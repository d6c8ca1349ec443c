//! Dense alphamap weight grid with bounds-checked access.

use crate::core::{Error, Result};

/// A dense (height, width, layers) grid of non-negative layer weights.
///
/// Storage is a flat row-major buffer indexed `(row * width + col) *
/// layers + channel`. The grid is owned by the host for the duration of
/// a terrain edit; mix and paint borrow it per call and retain nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphamapGrid {
    height: usize,
    width: usize,
    layers: usize,
    weights: Vec<f32>,
}

impl AlphamapGrid {
    /// Create a zero-filled grid. Every cell starts degenerate (all
    /// channels 0) until the host writes weights into it.
    pub fn new(height: usize, width: usize, layers: usize) -> Self {
        Self {
            height,
            width,
            layers,
            weights: vec![0.0; height * width * layers],
        }
    }

    /// Create a grid with every channel of every cell set to `value`.
    pub fn filled(height: usize, width: usize, layers: usize, value: f32) -> Self {
        Self {
            height,
            width,
            layers,
            weights: vec![value; height * width * layers],
        }
    }

    /// Wrap an existing weight buffer (row-major, channel innermost).
    pub fn from_weights(
        height: usize,
        width: usize,
        layers: usize,
        weights: Vec<f32>,
    ) -> Result<Self> {
        let expected = height * width * layers;
        if weights.len() != expected {
            return Err(Error::ShapeMismatch {
                got: weights.len(),
                expected,
            });
        }
        Ok(Self {
            height,
            width,
            layers,
            weights,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Raw weight buffer, row-major with channel innermost.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }

    /// Read one weight. Fails if any index is outside its bound.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Result<f32> {
        self.check(row, col, channel)?;
        Ok(self.weights[self.index(row, col, channel)])
    }

    /// Write one weight. Fails if any index is outside its bound; no
    /// side effect beyond the single cell.
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: f32) -> Result<()> {
        self.check(row, col, channel)?;
        let i = self.index(row, col, channel);
        self.weights[i] = value;
        Ok(())
    }

    /// All channel weights of one cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<&[f32]> {
        self.check_cell(row, col)?;
        let base = self.cell_index(row, col);
        Ok(&self.weights[base..base + self.layers])
    }

    /// Mutable channel weights of one cell.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut [f32]> {
        self.check_cell(row, col)?;
        let base = self.cell_index(row, col);
        let layers = self.layers;
        Ok(&mut self.weights[base..base + layers])
    }

    /// Sum of a cell's weights across all channels.
    pub fn cell_sum(&self, row: usize, col: usize) -> Result<f32> {
        Ok(self.cell(row, col)?.iter().sum())
    }

    /// Rescale one cell's weights so they sum to 1.
    ///
    /// A cell whose weights sum to 0 is degenerate and left untouched;
    /// dividing by zero here would poison the cell with NaN.
    pub fn renormalize_cell(&mut self, row: usize, col: usize) -> Result<()> {
        let cell = self.cell_mut(row, col)?;
        let sum: f32 = cell.iter().sum();
        if sum > 0.0 {
            for weight in cell.iter_mut() {
                *weight /= sum;
            }
        }
        Ok(())
    }

    fn index(&self, row: usize, col: usize, channel: usize) -> usize {
        self.cell_index(row, col) + channel
    }

    fn cell_index(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * self.layers
    }

    fn check(&self, row: usize, col: usize, channel: usize) -> Result<()> {
        self.check_cell(row, col)?;
        if channel >= self.layers {
            return Err(Error::IndexOutOfRange {
                axis: "channel",
                index: channel,
                bound: self.layers,
            });
        }
        Ok(())
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height {
            return Err(Error::IndexOutOfRange {
                axis: "row",
                index: row,
                bound: self.height,
            });
        }
        if col >= self.width {
            return Err(Error::IndexOutOfRange {
                axis: "column",
                index: col,
                bound: self.width,
            });
        }
        Ok(())
    }
}

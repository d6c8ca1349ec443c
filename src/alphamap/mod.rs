//! Alphamap weight grid and whole-grid layer mixing.
//!
//! An alphamap stores one weight per surface layer per cell. A cell's
//! weights describe blend proportions and must sum to 1 after any edit
//! (all-zero cells are degenerate and left alone).

pub mod grid;
pub mod mixer;

pub use grid::AlphamapGrid;
pub use mixer::mix;

use crate::core::{Error, Result};

/// Two distinct layer channels selected for a mix or paint operation.
///
/// Plain data; distinctness and bounds are checked by [`validate`]
/// before any operation mutates the grid.
///
/// [`validate`]: ChannelPair::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPair {
    /// Source channel (weight is drained from this layer when mixing).
    pub a: usize,
    /// Destination channel.
    pub b: usize,
}

impl ChannelPair {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Check distinctness and that both channels exist in a grid with
    /// `layers` channels. Called by every operation before mutating.
    pub fn validate(&self, layers: usize) -> Result<()> {
        if self.a == self.b {
            return Err(Error::InvalidChannelPair(self.a));
        }
        for channel in [self.a, self.b] {
            if channel >= layers {
                return Err(Error::IndexOutOfRange {
                    axis: "channel",
                    index: channel,
                    bound: layers,
                });
            }
        }
        Ok(())
    }
}

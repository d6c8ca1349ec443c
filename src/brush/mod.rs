//! Circular brush painting over alphamap weights.

pub mod painter;
pub mod session;

pub use painter::{paint, BrushParams};
pub use session::{GridMapping, PaintSession};

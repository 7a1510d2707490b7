//! Brick color palette, shape catalog, and cell types.
#![forbid(unsafe_code)]

pub mod config;
pub mod palette;
pub mod shapes;
pub mod types;

// Re-exports for convenience
pub use palette::{Color, Palette};
pub use shapes::{BrickShape, ShapeCatalog};
pub use types::{BrickId, Cell, ColorId, Footprint};

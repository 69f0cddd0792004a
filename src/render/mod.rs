//! Rasterizers and the text assembly around them.

pub mod bar;
pub mod braille;
pub mod frame;
pub mod grid;
pub mod line;
pub mod pie;
pub mod spark;

pub use braille::{BrailleCanvas, braille_char};
pub use grid::{Cell, Grid};
pub use line::{Projection, Stroke, walk_segment};
pub use pie::{Sector, percentages};

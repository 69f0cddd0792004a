//! Data model, configuration and the numeric helpers the renderers share.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;
pub mod scale;
pub mod terminal;
pub mod theme;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{BarMode, Options, OptionsBuilder, Orientation, Style};
pub use data::{Dataset, ParseDataError, Series};
pub use error::{ChartError, Error};
pub use terminal::Capabilities;
pub use theme::Theme;

//! tincture parses colors written in a dozen notations, converts them
//! between color spaces and formats them back to text.
//!
//! Every color is stored as sRGB channels in `0..=255` plus alpha in
//! `0..=1`. All other spaces are derived on demand.
//!
//! ```rust
//! use tincture::{Color, Notation};
//! let mut c = Color::new("rgba(50%, 20%, 30%, 80%)");
//! assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (127.0, 51.0, 77.0, 0.8));
//!
//! c.hue_by(180.0).alpha_to(1.0);
//! assert_eq!(c.format(Notation::Hex).unwrap(), "#337F65");
//! ```

#![warn(missing_docs)]

mod adjust;
mod color;
mod convert;
mod error;
pub mod format;
mod interpolate;
mod math;
pub mod models;
pub mod names;
pub mod parse;
pub mod registry;
mod test;

pub use adjust::{HueValue, NamedHue};
pub use color::{Color, Component, Components, Notation};
pub use error::{Error, Result};
pub use format::{Flags, Formatter, Options};
pub use parse::{Field, Fields, Input, Parser};
pub use registry::{extend, Plugin};

//! Models are records that represent a color in one specific color space or
//! notation. Every model converts to and from the canonical [`Rgb`] record,
//! either directly or through [`Xyz`].
//!
//! Conversions never clamp: out of range input is extrapolated. Clamping
//! happens when a color is parsed or mutated, never in between.
//!
//! ```rust
//! use tincture::models::{Lab, Rgb, Xyz};
//! let lch = Lab::from(Xyz::from(Rgb::new(210.0, 105.0, 30.0))).to_polar();
//! assert_eq!(lch.h.round(), 56.0);
//! ```

use crate::color::Component;

mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod hwb;
mod lab;
mod luv;
mod rgb;
mod ryb;
mod uvw;
mod xyz;

pub use cmyk::Cmyk;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use lab::{Lab, Lch};
pub use luv::Luv;
pub use rgb::Rgb;
pub use ryb::Ryb;
pub use uvw::Uvw;
pub use xyz::{Xyz, D50};

/// A trait implemented for color models that can be converted to and from
/// the canonical [`Rgb`] record. Implement it for your own record to make it
/// available through [`Color::to`](crate::Color::to).
pub trait Model: Sized {
    /// Convert the canonical record to this model.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Convert this model to the canonical record.
    fn to_rgb(&self) -> Rgb;
}

/// Calculate the hue from RGB components in `0..=1` and return it along with
/// the min and max values.
fn hue_with_min_max(
    red: Component,
    green: Component,
    blue: Component,
) -> (Component, Component, Component) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        0.0
    };

    (crate::math::adjust_hue(hue), min, max)
}

/// Build RGB channels in `0..=1` from a hue and the chroma, adding `m` to
/// every channel. Shared by the HSL and HSV inverse transforms.
fn hue_to_rgb(hue: Component, chroma: Component, m: Component) -> Rgb {
    let sector = crate::math::adjust_hue(hue) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (red, green, blue) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb::new((red + m) * 255.0, (green + m) * 255.0, (blue + m) * 255.0)
}

//! Model a color in the sRGB color space.

use crate::{color::Component, models::Model};

tincture_macros::gen_model! {
    /// A color specified in the sRGB color space, channels in `0..=255`.
    pub struct Rgb {
        /// The red component of the color.
        r: Component,
        /// The green component of the color.
        g: Component,
        /// The blue component of the color.
        b: Component,
    }
}

impl Model for Rgb {
    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }
}

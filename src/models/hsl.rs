//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::Component,
    models::{hue_to_rgb, hue_with_min_max, Model, Rgb},
};

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        h: Component,
        /// The saturation component of the color, `0..=100`.
        s: Component,
        /// The lightness component of the color, `0..=100`.
        l: Component,
    }
}

impl Model for Hsl {
    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, min, max) = hue_with_min_max(rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Hsl::new(hue, saturation * 100.0, lightness * 100.0).with_alpha(rgb.alpha)
    }

    fn to_rgb(&self) -> Rgb {
        let saturation = self.s / 100.0;
        let lightness = self.l / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        hue_to_rgb(self.h, chroma, lightness - chroma / 2.0).with_alpha(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn red() {
        let hsl = Hsl::from_rgb(&Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
    }

    #[test]
    fn navy() {
        let rgb = Hsl::new(240.0, 100.0, 25.098039).to_rgb();
        assert_component_eq!(rgb.r, 0.0);
        assert_component_eq!(rgb.g, 0.0);
        assert_component_eq!(rgb.b, 128.0);
        assert_eq!(rgb.alpha, 1.0);
    }

    #[test]
    fn gray_has_no_saturation() {
        for value in [0.0, 128.0, 255.0] {
            let hsl = Hsl::from_rgb(&Rgb::new(value, value, value));
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
        }
    }

    #[test]
    fn hue_is_normalized_before_conversion() {
        let a = Hsl::new(-120.0, 50.0, 50.0).to_rgb();
        let b = Hsl::new(240.0, 50.0, 50.0).to_rgb();
        assert_component_eq!(a.r, b.r);
        assert_component_eq!(a.g, b.g);
        assert_component_eq!(a.b, b.b);
    }

    #[test]
    fn round_trip() {
        for rgb in [
            Rgb::new(210.0, 105.0, 30.0).with_alpha(0.3),
            Rgb::new(0.0, 128.0, 128.0),
            Rgb::new(1.0, 2.0, 254.0),
            Rgb::new(200.0, 10.0, 100.0),
        ] {
            let back = Hsl::from_rgb(&rgb).to_rgb();
            assert_component_eq!(back.r, rgb.r);
            assert_component_eq!(back.g, rgb.g);
            assert_component_eq!(back.b, rgb.b);
            assert_eq!(back.alpha, rgb.alpha);
        }
    }
}

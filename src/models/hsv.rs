//! Model a color with the HSV notation in the sRGB color space.

use crate::{
    color::Component,
    models::{hue_to_rgb, hue_with_min_max, Model, Rgb},
};

tincture_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        h: Component,
        /// The saturation component of the color, `0..=100`.
        s: Component,
        /// The value component of the color, `0..=100`.
        v: Component,
    }
}

impl Model for Hsv {
    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, min, max) = hue_with_min_max(rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0);

        let delta = max - min;
        let saturation = if delta == 0.0 { 0.0 } else { delta / max };

        Hsv::new(hue, saturation * 100.0, max * 100.0).with_alpha(rgb.alpha)
    }

    fn to_rgb(&self) -> Rgb {
        let value = self.v / 100.0;
        let chroma = value * self.s / 100.0;

        hue_to_rgb(self.h, chroma, value - chroma).with_alpha(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn chocolate() {
        let hsv = Hsv::from_rgb(&Rgb::new(210.0, 105.0, 30.0));
        assert_component_eq!(hsv.h, 25.0);
        assert_component_eq!(hsv.s, 85.714286);
        assert_component_eq!(hsv.v, 82.352941);
    }

    #[test]
    fn black_has_no_saturation() {
        assert_eq!(Hsv::from_rgb(&Rgb::new(0.0, 0.0, 0.0)), Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn round_trip() {
        for rgb in [
            Rgb::new(210.0, 105.0, 30.0),
            Rgb::new(0.0, 128.0, 128.0),
            Rgb::new(77.0, 200.0, 3.0),
        ] {
            let back = Hsv::from_rgb(&rgb).to_rgb();
            assert_component_eq!(back.r, rgb.r);
            assert_component_eq!(back.g, rgb.g);
            assert_component_eq!(back.b, rgb.b);
        }
    }
}

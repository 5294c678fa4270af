//! Model a color with the device CMYK notation.

use crate::{
    color::Component,
    models::{Model, Rgb},
};

tincture_macros::gen_model! {
    /// A color specified in CMYK, channels in `0..=100`.
    pub struct Cmyk {
        /// The cyan component.
        c: Component,
        /// The magenta component.
        m: Component,
        /// The yellow component.
        y: Component,
        /// The key (black) component.
        k: Component,
    }
}

impl Model for Cmyk {
    fn from_rgb(rgb: &Rgb) -> Self {
        let cyan = 1.0 - rgb.r / 255.0;
        let magenta = 1.0 - rgb.g / 255.0;
        let yellow = 1.0 - rgb.b / 255.0;
        let key = cyan.min(magenta).min(yellow);

        if key == 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0).with_alpha(rgb.alpha);
        }

        let scale = |v: Component| (v - key) / (1.0 - key) * 100.0;
        Cmyk::new(scale(cyan), scale(magenta), scale(yellow), key * 100.0).with_alpha(rgb.alpha)
    }

    fn to_rgb(&self) -> Rgb {
        let black = 1.0 - self.k / 100.0;
        let channel = |v: Component| 255.0 * (1.0 - v / 100.0) * black;

        Rgb::new(channel(self.c), channel(self.m), channel(self.y)).with_alpha(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn black_is_all_key() {
        let cmyk = Cmyk::from_rgb(&Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn chocolate() {
        let cmyk = Cmyk::from_rgb(&Rgb::new(210.0, 105.0, 30.0));
        assert_component_eq!(cmyk.c, 0.0);
        assert_component_eq!(cmyk.m, 50.0);
        assert_component_eq!(cmyk.y, 85.714286);
        assert_component_eq!(cmyk.k, 17.647059);
    }

    #[test]
    fn round_trip() {
        for rgb in [
            Rgb::new(210.0, 105.0, 30.0),
            Rgb::new(255.0, 255.0, 255.0),
            Rgb::new(0.0, 0.0, 0.0),
            Rgb::new(13.0, 240.0, 99.0).with_alpha(0.2),
        ] {
            let back = Cmyk::from_rgb(&rgb).to_rgb();
            assert_component_eq!(back.r, rgb.r);
            assert_component_eq!(back.g, rgb.g);
            assert_component_eq!(back.b, rgb.b);
            assert_eq!(back.alpha, rgb.alpha);
        }
    }
}

//! Model a color with the HWB notation in the sRGB color space. HWB is a
//! reparametrization of HSV.

use crate::{
    color::Component,
    models::{Hsv, Model, Rgb},
};

tincture_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, in degrees.
        h: Component,
        /// The whiteness component of the color, `0..=100`.
        w: Component,
        /// The blackness component of the color, `0..=100`.
        b: Component,
    }
}

impl From<Hsv> for Hwb {
    fn from(value: Hsv) -> Self {
        let saturation = value.s / 100.0;
        let v = value.v / 100.0;

        Hwb::new(value.h, (1.0 - saturation) * v * 100.0, (1.0 - v) * 100.0)
            .with_alpha(value.alpha)
    }
}

impl From<Hwb> for Hsv {
    fn from(value: Hwb) -> Self {
        let mut whiteness = value.w / 100.0;
        let mut blackness = value.b / 100.0;

        // Whiteness and blackness that add up past 100% describe a gray.
        let sum = whiteness + blackness;
        if sum > 1.0 {
            whiteness /= sum;
            blackness /= sum;
        }

        let v = 1.0 - blackness;
        let saturation = if v == 0.0 { 0.0 } else { 1.0 - whiteness / v };

        Hsv::new(value.h, saturation * 100.0, v * 100.0).with_alpha(value.alpha)
    }
}

impl Model for Hwb {
    fn from_rgb(rgb: &Rgb) -> Self {
        Hwb::from(Hsv::from_rgb(rgb))
    }

    fn to_rgb(&self) -> Rgb {
        Hsv::from(*self).to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hwb_to_rgb() {
        // hwb(40deg 30% 40%)
        let rgb = Hwb::new(40.0, 30.0, 40.0).to_rgb();
        // rgb(153, 128, 77)
        assert_component_eq!(rgb.r, 153.0);
        assert_component_eq!(rgb.g, 127.5);
        assert_component_eq!(rgb.b, 76.5);
    }

    #[test]
    fn chocolate() {
        let hwb = Hwb::from_rgb(&Rgb::new(210.0, 105.0, 30.0));
        assert_component_eq!(hwb.h, 25.0);
        assert_component_eq!(hwb.w, 11.764706);
        assert_component_eq!(hwb.b, 17.647059);
    }

    #[test]
    fn whiteness_and_blackness_past_one_is_gray() {
        let rgb = Hwb::new(200.0, 80.0, 80.0).to_rgb();
        assert_component_eq!(rgb.r, 127.5);
        assert_component_eq!(rgb.g, 127.5);
        assert_component_eq!(rgb.b, 127.5);
    }

    #[test]
    fn full_blackness_is_black() {
        let rgb = Hwb::new(0.0, 0.0, 100.0).to_rgb();
        assert_eq!(rgb.channels(), [0.0, 0.0, 0.0]);
    }
}

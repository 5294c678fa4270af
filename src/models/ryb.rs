//! Model a color in the painter's RYB (red, yellow, blue) color wheel.
//!
//! There is no closed form for RYB. Both directions are empirical and their
//! steps have to run in exactly this order: remove the whiteness, move the
//! shared yellow (or green) component, double when both remainders are
//! non-zero, rescale to the original maximum and add the whiteness back.
//! The two directions are not exact inverses of each other.

use crate::{
    color::Component,
    models::{Model, Rgb},
};

tincture_macros::gen_model! {
    /// A color in the RYB color wheel, channels in `0..=255`.
    pub struct Ryb {
        /// The red component.
        r: Component,
        /// The yellow component.
        y: Component,
        /// The blue component.
        b: Component,
    }
}

impl Model for Ryb {
    fn from_rgb(rgb: &Rgb) -> Self {
        let whiteness = rgb.r.min(rgb.g).min(rgb.b);
        let mut red = rgb.r - whiteness;
        let mut green = rgb.g - whiteness;
        let mut blue = rgb.b - whiteness;

        let max_green = red.max(green).max(blue);

        let mut yellow = red.min(green);
        red -= yellow;
        green -= yellow;

        if blue > 0.0 && green > 0.0 {
            blue /= 2.0;
            green /= 2.0;
        }

        yellow += green;
        blue += green;

        let max_yellow = red.max(yellow).max(blue);
        if max_yellow > 0.0 {
            let n = max_green / max_yellow;
            red *= n;
            yellow *= n;
            blue *= n;
        }

        Ryb::new(red + whiteness, yellow + whiteness, blue + whiteness).with_alpha(rgb.alpha)
    }

    fn to_rgb(&self) -> Rgb {
        let whiteness = self.r.min(self.y).min(self.b);
        let mut red = self.r - whiteness;
        let mut yellow = self.y - whiteness;
        let mut blue = self.b - whiteness;

        let max_yellow = red.max(yellow).max(blue);

        let mut green = yellow.min(blue);
        yellow -= green;
        blue -= green;

        if blue > 0.0 && green > 0.0 {
            blue *= 2.0;
            green *= 2.0;
        }

        red += yellow;
        green += yellow;

        let max_green = red.max(green).max(blue);
        if max_green > 0.0 {
            let n = max_yellow / max_green;
            red *= n;
            green *= n;
            blue *= n;
        }

        Rgb::new(red + whiteness, green + whiteness, blue + whiteness).with_alpha(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn primaries() {
        assert_eq!(
            Ryb::from_rgb(&Rgb::new(255.0, 0.0, 0.0)),
            Ryb::new(255.0, 0.0, 0.0)
        );
        assert_eq!(
            Ryb::from_rgb(&Rgb::new(0.0, 0.0, 128.0)),
            Ryb::new(0.0, 0.0, 128.0)
        );
        assert_eq!(
            Ryb::new(0.0, 255.0, 0.0).to_rgb(),
            Rgb::new(255.0, 255.0, 0.0)
        );
    }

    #[test]
    fn chocolate() {
        let ryb = Ryb::from_rgb(&Rgb::new(210.0, 105.0, 30.0));
        assert_component_eq!(ryb.r, 210.0);
        assert_component_eq!(ryb.y, 158.571429);
        assert_component_eq!(ryb.b, 30.0);
    }

    #[test]
    fn green_splits_between_yellow_and_blue() {
        // teal in RGB has both a blue and a green remainder.
        let ryb = Ryb::from_rgb(&Rgb::new(0.0, 128.0, 128.0));
        assert_component_eq!(ryb.r, 0.0);
        assert_component_eq!(ryb.y, 64.0);
        assert_component_eq!(ryb.b, 128.0);
    }

    #[test]
    fn directions_are_independent_approximations() {
        let rgb = Ryb::new(0.0, 128.0, 128.0).to_rgb();
        assert_component_eq!(rgb.r, 0.0);
        assert_component_eq!(rgb.g, 128.0);
        assert_component_eq!(rgb.b, 0.0);
    }

    #[test]
    fn grays_are_untouched() {
        let ryb = Ryb::from_rgb(&Rgb::new(90.0, 90.0, 90.0).with_alpha(0.4));
        assert_eq!(ryb, Ryb::new(90.0, 90.0, 90.0).with_alpha(0.4));
        assert_eq!(ryb.to_rgb(), Rgb::new(90.0, 90.0, 90.0).with_alpha(0.4));
    }
}
